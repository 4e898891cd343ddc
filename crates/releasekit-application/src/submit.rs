// SPDX-License-Identifier: GPL-3.0-or-later

//! The final submission action.
//!
//! A release goes out only when QC reports no errors and the distribution
//! terms were accepted. The service is called once; failures are reported and
//! the release is left as it was for a manual retry.

use async_trait::async_trait;
use releasekit_domain::{
    DomainEvent, QcReport, Release, ReleaseSubmissionFailedPayload, ReleaseSubmittedPayload,
    SubmissionId,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::events::{EventPublisher, RELEASE_SUBMISSION_FAILED, RELEASE_SUBMITTED};
use crate::submission_validation::QcValidator;

pub type Result<T> = std::result::Result<T, SubmissionError>;

/// Errors raised by a [`SubmissionService`] implementation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("submission service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("submission service responded with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid response from submission service: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission blocked by {errors} QC error(s)")]
    Blocked { errors: usize },
    #[error("distribution terms have not been accepted")]
    TermsNotAccepted,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// External collaborator that accepts a complete release.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, release: &Release) -> std::result::Result<SubmissionId, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub report: QcReport,
}

/// Both conditions are required; neither is enough alone.
pub fn can_submit(report: &QcReport, terms_accepted: bool) -> bool {
    !report.has_errors() && terms_accepted
}

pub async fn submit_release<S, P>(
    release: &Release,
    validator: &QcValidator,
    terms_accepted: bool,
    service: &S,
    publisher: &P,
) -> Result<SubmissionReceipt>
where
    S: SubmissionService + ?Sized,
    P: EventPublisher,
{
    let report = validator.validate(release);
    if report.has_errors() {
        warn!(
            target: "submission",
            release_id = %release.id,
            errors = report.errors.len(),
            "submission blocked by QC errors"
        );
        return Err(SubmissionError::Blocked {
            errors: report.errors.len(),
        });
    }
    if !terms_accepted {
        warn!(target: "submission", release_id = %release.id, "distribution terms not accepted");
        return Err(SubmissionError::TermsNotAccepted);
    }

    match service.submit(release).await {
        Ok(submission_id) => {
            info!(
                target: "submission",
                release_id = %release.id,
                submission_id = %submission_id,
                warnings = report.warnings.len(),
                "release submitted"
            );
            publisher.publish(&DomainEvent::new(
                RELEASE_SUBMITTED,
                ReleaseSubmittedPayload {
                    release_id: release.id,
                    submission_id: submission_id.clone(),
                    track_count: release.tracks.len(),
                    warning_count: report.warnings.len(),
                },
            ));
            Ok(SubmissionReceipt {
                submission_id,
                report,
            })
        }
        Err(err) => {
            warn!(target: "submission", release_id = %release.id, error = %err, "submission failed");
            publisher.publish(&DomainEvent::new(
                RELEASE_SUBMISSION_FAILED,
                ReleaseSubmissionFailedPayload {
                    release_id: release.id,
                    reason: err.to_string(),
                },
            ));
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InMemoryEventBus;
    use chrono::NaiveDate;
    use releasekit_domain::{AlbumType, Artist, Contributor, FileRef, Track};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeService {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeService {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl SubmissionService for FakeService {
        async fn submit(&self, _release: &Release) -> std::result::Result<SubmissionId, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ServiceError::HttpStatus {
                    status: 503,
                    body: "unavailable".into(),
                })
            } else {
                Ok(SubmissionId("sub-1".into()))
            }
        }
    }

    fn ready_release() -> Release {
        let mut release = Release::new("Blue Hour", AlbumType::Single);
        release.consumer_release_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let mut track = Track::new("Blue Hour");
        track.is_title = true;
        track.genre = Some("Pop".into());
        track.artists.push(Artist::main("Jane Doe"));
        track
            .contributors
            .push(Contributor::new("John Smith", ["composer", "lyricist"]));
        release.tracks.push(track);
        release.files.cover_image = Some(FileRef::named("cover.jpg"));
        release.files.audio_files.push(FileRef::named("01.wav"));
        release
    }

    #[test]
    fn gate_needs_both_conditions() {
        let clean = QcReport::default();
        let mut blocked = QcReport::default();
        blocked.push(releasekit_domain::Issue::error(
            releasekit_domain::IssueCode::CoverImageRequired,
            "files.cover_image",
        ));
        assert!(can_submit(&clean, true));
        assert!(!can_submit(&clean, false));
        assert!(!can_submit(&blocked, true));
        assert!(!can_submit(&blocked, false));
    }

    #[tokio::test]
    async fn successful_submission_publishes_event() {
        let service = FakeService::new(false);
        let bus = InMemoryEventBus::new();
        let release = ready_release();

        let receipt = submit_release(&release, &QcValidator::default(), true, &service, &bus)
            .await
            .expect("submission succeeds");

        assert_eq!(receipt.submission_id, SubmissionId("sub-1".into()));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["name"], RELEASE_SUBMITTED);
        assert_eq!(events[0]["payload"]["submission_id"], "sub-1");
    }

    #[tokio::test]
    async fn qc_errors_block_before_the_service_is_called() {
        let service = FakeService::new(false);
        let bus = InMemoryEventBus::new();
        let mut release = ready_release();
        release.files.cover_image = None;

        let err = submit_release(&release, &QcValidator::default(), true, &service, &bus)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Blocked { errors: 1 }));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn terms_must_be_accepted() {
        let service = FakeService::new(false);
        let bus = InMemoryEventBus::new();
        let err = submit_release(&ready_release(), &QcValidator::default(), false, &service, &bus)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::TermsNotAccepted));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn service_failure_is_not_retried() {
        let service = FakeService::new(true);
        let bus = InMemoryEventBus::new();
        let release = ready_release();
        let before = release.clone();

        let err = submit_release(&release, &QcValidator::default(), true, &service, &bus)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Service(ServiceError::HttpStatus { status: 503, .. })
        ));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(release, before);
        assert_eq!(bus.names(), vec![RELEASE_SUBMISSION_FAILED.to_string()]);
    }
}
