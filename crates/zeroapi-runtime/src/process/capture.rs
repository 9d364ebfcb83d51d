//! Merged stdout/stderr capture.
//!
//! Both standard streams of the child are connected to the write end of a
//! single OS pipe, so the captured text preserves the order in which the
//! child wrote it.

use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};

/// Combined output and exit status of a finished child.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub text: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Configure the command so no console window opens on Windows.
pub fn configure_command_no_window(cmd: &mut Command) {
    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = cmd;
    }
}

/// Run `cmd` to completion with stderr merged into stdout.
///
/// Blocks until the child exits and closes its end of the pipe. There is no
/// timeout: a child that never exits blocks the caller forever.
///
/// The captured bytes are decoded lossily, so any byte sequence that is not
/// valid UTF-8 shows up in [`CapturedOutput::text`] as U+FFFD.
pub fn run_merged(mut cmd: Command) -> io::Result<CapturedOutput> {
    let (mut reader, writer) = io::pipe()?;
    let writer_for_stderr = writer.try_clone()?;

    cmd.stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_for_stderr);
    configure_command_no_window(&mut cmd);

    let mut child = cmd.spawn()?;

    // The command still owns copies of the write end; EOF only arrives once they are closed.
    drop(cmd);

    let mut bytes = Vec::new();
    let read_result = reader.read_to_end(&mut bytes);
    let status = child.wait()?;
    read_result?;

    Ok(CapturedOutput {
        status,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn test_merges_streams_in_write_order() {
        let captured = run_merged(sh("echo one; echo two >&2; echo three")).unwrap();
        assert!(captured.success());
        assert_eq!(captured.text, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_reports_non_zero_exit() {
        let captured = run_merged(sh("echo 'bad input' >&2; exit 3")).unwrap();
        assert!(!captured.success());
        assert_eq!(captured.status.code(), Some(3));
        assert_eq!(captured.text, "bad input\n");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let captured = run_merged(sh("printf '\\377ok'")).unwrap();
        assert!(captured.success());
        assert_eq!(captured.text, "\u{FFFD}ok");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = run_merged(Command::new("/nonexistent/zeroapi-test-binary"));
        assert!(result.is_err());
    }
}
