use std::io::Write;
use crate::models::UploadKind;

pub fn format_upload(kind: UploadKind, text: &str) -> String {

    format!("{}{}", kind.console_prefix(), text)

}

// stdout is the only record of what was uploaded
pub fn log_upload(out: &mut impl Write, kind: UploadKind, text: &str) -> std::io::Result<()> {

    writeln!(out, "{}", format_upload(kind, text))?;
    out.flush()

}

#[cfg(test)]
mod tests {

    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {

        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }

    }

    #[test]
    fn test_run_result_record() {

        let record = format_upload(UploadKind::RunResult, "hello");
        assert_eq!(record, "Run results: \nhello");

    }

    #[test]
    fn test_run_data_record_keeps_newlines() {

        let record = format_upload(UploadKind::RunData, "x=1\ny=2");
        assert_eq!(record, "Run data: \nx=1\ny=2");

    }

    #[test]
    fn test_empty_upload_is_just_the_prefix() {

        assert_eq!(format_upload(UploadKind::RunData, ""), "Run data: \n");

    }

    #[test]
    fn test_log_upload_writes_one_line() {

        let mut out = Vec::new();
        log_upload(&mut out, UploadKind::RunResult, "hello").expect("Failed to write");

        assert_eq!(out, b"Run results: \nhello\n");

    }

    #[test]
    fn test_log_upload_reports_write_failure() {

        let err = log_upload(&mut ClosedPipe, UploadKind::RunData, "x").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);

    }

}
