use anyhow::Context;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::Write;

/// Raised when the process was started without a prompt argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissingArgument;

impl MissingArgument {
    pub const EXIT_CODE: i32 = 1;
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("No prompt provided!")
    }
}

impl std::error::Error for MissingArgument {}

/// Picks the prompt out of an argument list that no longer contains the
/// program name. Anything past the first element is ignored.
pub fn first_prompt<I, T>(args: I) -> Result<OsString, MissingArgument>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter().next().map(Into::into).ok_or(MissingArgument)
}

/// Writes exactly one line to `out`: the prompt, or the missing argument
/// message. In the latter case the returned error downcasts to
/// [`MissingArgument`].
pub fn echo<I, T, W>(args: I, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let prompt = match first_prompt(args) {
        Ok(prompt) => prompt,
        Err(err) => {
            log::debug!("No prompt argument supplied");
            writeln!(out, "{}", err)
                .and_then(|_| out.flush())
                .context("Unable to write to output")?;
            return Err(err.into());
        }
    };

    let bytes = prompt_bytes(&prompt);
    log::debug!("Echoing prompt of {} bytes", bytes.len());
    out.write_all(&bytes)
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush())
        .context("Unable to write prompt to output")?;
    Ok(())
}

#[cfg(unix)]
fn prompt_bytes(prompt: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(prompt.as_bytes())
}

#[cfg(not(unix))]
fn prompt_bytes(prompt: &OsStr) -> Cow<'_, [u8]> {
    match prompt.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
