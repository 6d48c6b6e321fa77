use std::process::{ExitCode, ExitStatus};

/// Reproduce the engine's exit status as this process's exit code
pub fn exit_code(status: ExitStatus) -> ExitCode {
    if status.success() {
        return ExitCode::SUCCESS;
    }
    ExitCode::from(failure_code(status))
}

fn failure_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return match u8::try_from(code) {
            Ok(0) | Err(_) => 1,
            Ok(byte) => byte,
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    fn exited(code: i32) -> ExitStatus {
        ExitStatus::from_raw(code << 8)
    }

    #[test]
    fn test_engine_code_passed_through() {
        assert_eq!(failure_code(exited(1)), 1);
        assert_eq!(failure_code(exited(3)), 3);
        assert_eq!(failure_code(exited(255)), 255);
    }

    #[test]
    fn test_success_status() {
        assert!(exited(0).success());
        assert_eq!(
            format!("{:?}", exit_code(exited(0))),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }

    #[test]
    fn test_signal_maps_above_128() {
        // SIGKILL
        assert_eq!(failure_code(ExitStatus::from_raw(9)), 137);
    }
}
