use crate::error::QuizError;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn open_log_file(path: &Path) -> Result<File, QuizError> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Routes `tracing` output to `path`. Writing to stdout would corrupt the
/// alternate screen, so the terminal never receives log lines.
pub fn init(path: &Path) -> Result<(), QuizError> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| QuizError::Logger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.log");
        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "first").unwrap();
        }
        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }
        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("quiz.log");
        assert!(matches!(open_log_file(&path), Err(QuizError::Io(_))));
    }

    #[test]
    fn test_init_writes_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.log");
        init(&path).unwrap();
        tracing::info!("logger test event");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logger test event"));
        assert!(matches!(init(&path), Err(QuizError::Logger(_))));
    }
}
