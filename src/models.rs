/// Which of the two upload endpoints a body arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    RunResult,
    RunData
}

impl UploadKind {

    pub fn path(&self) -> &'static str {

        match self {
            UploadKind::RunResult => "/upload_run_result",
            UploadKind::RunData => "/upload_run_data"
        }

    }

    // header line written to the console before the uploaded text
    pub fn console_prefix(&self) -> &'static str {

        match self {
            UploadKind::RunResult => "Run results: \n",
            UploadKind::RunData => "Run data: \n"
        }

    }

}
