//! # 제출 기록 파일(NDJSON) 서비스
//!
//! 검증을 통과한 제출 기록을 JSON 한 줄씩 파일 끝에 추가합니다.
//! 파일은 요청마다 추가(append) 모드로 열고 바로 닫습니다.
//! 기존 줄을 수정하거나 지우는 기능은 없습니다.

use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use crate::{error::AppError, models::SubmissionRecord};

/// 추가 전용(append-only) 제출 기록 파일
///
/// `PathBuf`만 가지고 있으므로 clone해도 같은 파일을 가리킵니다.
#[derive(Debug, Clone)]
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 기록 파일의 부모 디렉토리가 없으면 생성합니다. 서버 시작 시 한 번 호출합니다.
    pub async fn ensure_parent_dir(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            // "submissions.ndjson"처럼 상대 파일명만 있으면 parent()는 빈 경로입니다.
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// 기록 하나를 JSON 한 줄(끝에 `\n`)로 직렬화해 파일 끝에 추가합니다.
    ///
    /// 한 줄 전체를 버퍼 하나로 만든 뒤 한 번에 씁니다.
    /// 여러 요청이 동시에 추가해도 줄이 섞이지 않는 것은 O_APPEND 단일 쓰기의 원자성에 의존합니다.
    pub async fn append(&self, record: &SubmissionRecord) -> Result<(), AppError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        // tokio의 File은 백그라운드 스레드에서 쓰므로, flush까지 기다려야 쓰기 에러를 받을 수 있습니다.
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), bytes = line.len(), "Submission appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequestMeta, SubmitRequest};
    use chrono::Utc;
    use serde_json::json;

    fn record(name: &str) -> SubmissionRecord {
        let valid = SubmitRequest::from_body(json!({"name": name, "email": "a@b.com", "consent": true}))
            .validate()
            .unwrap();
        SubmissionRecord::new(valid, RequestMeta::default(), Utc::now())
    }

    #[tokio::test]
    async fn appends_one_json_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let log = SubmissionLog::new(dir.path().join("submissions.ndjson"));

        log.append(&record("Alice")).await.unwrap();
        log.append(&record("Bob")).await.unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(content.ends_with('\n'));

        let first: SubmissionRecord = serde_json::from_str(lines[0]).unwrap();
        let second: SubmissionRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.name, "Alice");
        assert_eq!(second.name, "Bob");
    }

    #[tokio::test]
    async fn existing_lines_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.ndjson");
        std::fs::write(&path, "{\"legacy\":true}\n").unwrap();

        let log = SubmissionLog::new(&path);
        log.append(&record("Alice")).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\"legacy\":true}\n"));
        assert_eq!(content.lines().count(), 2);
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error_until_created() {
        let dir = tempfile::tempdir().unwrap();
        let log = SubmissionLog::new(dir.path().join("nested/data/submissions.ndjson"));

        assert!(matches!(log.append(&record("Alice")).await, Err(AppError::Io(_))));

        log.ensure_parent_dir().await.unwrap();
        log.append(&record("Alice")).await.unwrap();
        assert_eq!(std::fs::read_to_string(log.path()).unwrap().lines().count(), 1);
    }
}
