// SPDX-License-Identifier: GPL-3.0-or-later

//! Step-by-step submission session.
//!
//! Moving forward requires the current section to be free of errors; moving
//! back never does. The last step hands the release to [`submit_release`].

use releasekit_domain::{QcReport, Release, SubmissionId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::events::EventPublisher;
use crate::submission_validation::QcValidator;
use crate::submit::{submit_release, SubmissionError, SubmissionService};

pub type Result<T> = std::result::Result<T, WizardError>;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{step} section has {errors} error(s)")]
    SectionInvalid { step: WizardStep, errors: usize },
    #[error("release has already been submitted")]
    AlreadySubmitted,
    #[error("submission is only possible from the review step, current step is {0}")]
    NotAtReview(WizardStep),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Album,
    Tracks,
    Files,
    Distribution,
    Marketing,
    Review,
    Submitted,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Album,
        WizardStep::Tracks,
        WizardStep::Files,
        WizardStep::Distribution,
        WizardStep::Marketing,
        WizardStep::Review,
        WizardStep::Submitted,
    ];

    /// The step `advance` moves to. `Review` only leaves through `submit`.
    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Album => Some(WizardStep::Tracks),
            WizardStep::Tracks => Some(WizardStep::Files),
            WizardStep::Files => Some(WizardStep::Distribution),
            WizardStep::Distribution => Some(WizardStep::Marketing),
            WizardStep::Marketing => Some(WizardStep::Review),
            WizardStep::Review | WizardStep::Submitted => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Album | WizardStep::Submitted => None,
            WizardStep::Tracks => Some(WizardStep::Album),
            WizardStep::Files => Some(WizardStep::Tracks),
            WizardStep::Distribution => Some(WizardStep::Files),
            WizardStep::Marketing => Some(WizardStep::Distribution),
            WizardStep::Review => Some(WizardStep::Marketing),
        }
    }

    /// Whether an issue on `field` belongs to this step's section.
    pub fn owns_field(self, field: &str) -> bool {
        let section = if field.starts_with("tracks") {
            WizardStep::Tracks
        } else if field.starts_with("files") {
            WizardStep::Files
        } else if field.starts_with("territories") || field.starts_with("dsp_territories") {
            WizardStep::Distribution
        } else {
            WizardStep::Album
        };
        match self {
            WizardStep::Review => true,
            WizardStep::Marketing | WizardStep::Submitted => false,
            step => step == section,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Album => write!(f, "album"),
            Self::Tracks => write!(f, "tracks"),
            Self::Files => write!(f, "files"),
            Self::Distribution => write!(f, "distribution"),
            Self::Marketing => write!(f, "marketing"),
            Self::Review => write!(f, "review"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// QC issues belonging to one section of the form.
pub fn validate_section(validator: &QcValidator, step: WizardStep, release: &Release) -> QcReport {
    let mut section = QcReport::default();
    section.extend(
        validator
            .validate(release)
            .iter()
            .filter(|issue| step.owns_field(&issue.field))
            .cloned(),
    );
    section
}

pub struct SubmissionWizard {
    release: Release,
    step: WizardStep,
    terms_accepted: bool,
    validator: QcValidator,
    submission_id: Option<SubmissionId>,
}

impl SubmissionWizard {
    pub fn new(release: Release) -> Self {
        Self::with_validator(release, QcValidator::default())
    }

    pub fn with_validator(release: Release, validator: QcValidator) -> Self {
        Self {
            release,
            step: WizardStep::Album,
            terms_accepted: false,
            validator,
            submission_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn release_mut(&mut self) -> &mut Release {
        &mut self.release
    }

    pub fn submission_id(&self) -> Option<&SubmissionId> {
        self.submission_id.as_ref()
    }

    pub fn accept_terms(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn section_report(&self) -> QcReport {
        validate_section(&self.validator, self.step, &self.release)
    }

    pub fn report(&self) -> QcReport {
        self.validator.validate(&self.release)
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Review
            && crate::submit::can_submit(&self.report(), self.terms_accepted)
    }

    pub fn advance(&mut self) -> Result<WizardStep> {
        let next = match self.step.next() {
            Some(next) => next,
            None if self.step == WizardStep::Submitted => return Err(WizardError::AlreadySubmitted),
            None => return Ok(self.step),
        };

        let errors = self.section_report().errors.len();
        if errors > 0 {
            debug!(target: "wizard", step = %self.step, errors, "advance blocked");
            return Err(WizardError::SectionInvalid {
                step: self.step,
                errors,
            });
        }

        debug!(target: "wizard", from = %self.step, to = %next, "advanced");
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<WizardStep> {
        if self.step == WizardStep::Submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if let Some(previous) = self.step.previous() {
            debug!(target: "wizard", from = %self.step, to = %previous, "went back");
            self.step = previous;
        }
        Ok(self.step)
    }

    pub async fn submit<S, P>(&mut self, service: &S, publisher: &P) -> Result<SubmissionId>
    where
        S: SubmissionService + ?Sized,
        P: EventPublisher,
    {
        match self.step {
            WizardStep::Review => {}
            WizardStep::Submitted => return Err(WizardError::AlreadySubmitted),
            step => return Err(WizardError::NotAtReview(step)),
        }

        let receipt = submit_release(
            &self.release,
            &self.validator,
            self.terms_accepted,
            service,
            publisher,
        )
        .await?;

        info!(target: "wizard", release_id = %self.release.id, "wizard completed");
        self.step = WizardStep::Submitted;
        self.submission_id = Some(receipt.submission_id.clone());
        Ok(receipt.submission_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InMemoryEventBus;
    use crate::submit::ServiceError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use releasekit_domain::{AlbumType, Artist, Contributor, FileRef, IssueCode, Track};

    struct AcceptingService;

    #[async_trait]
    impl SubmissionService for AcceptingService {
        async fn submit(&self, _release: &Release) -> std::result::Result<SubmissionId, ServiceError> {
            Ok(SubmissionId("sub-42".into()))
        }
    }

    fn draft() -> Release {
        let mut release = Release::new("Blue Hour", AlbumType::Single);
        release.consumer_release_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        release
    }

    fn add_track(release: &mut Release) {
        let mut track = Track::new("Blue Hour");
        track.is_title = true;
        track.genre = Some("Pop".into());
        track.artists.push(Artist::main("Jane Doe"));
        track
            .contributors
            .push(Contributor::new("John Smith", ["composer", "lyricist"]));
        release.tracks.push(track);
    }

    #[test]
    fn sections_own_their_fields() {
        assert!(WizardStep::Album.owns_field("title"));
        assert!(WizardStep::Album.owns_field("pre_order_date"));
        assert!(WizardStep::Tracks.owns_field("tracks[0].isrc"));
        assert!(!WizardStep::Album.owns_field("tracks[0].isrc"));
        assert!(WizardStep::Files.owns_field("files.cover_image"));
        assert!(WizardStep::Distribution.owns_field("dsp_territories.spotify"));
        assert!(WizardStep::Review.owns_field("files.cover_image"));
        assert!(!WizardStep::Marketing.owns_field("title"));
    }

    #[test]
    fn album_section_ignores_later_sections() {
        let release = draft();
        let report = validate_section(&QcValidator::default(), WizardStep::Album, &release);
        assert!(report.is_valid(), "album section should pass: {report:?}");
        let tracks = validate_section(&QcValidator::default(), WizardStep::Tracks, &release);
        assert!(tracks.contains(IssueCode::NoTracks));
    }

    #[test]
    fn forward_is_gated_and_back_is_not() {
        let mut wizard = SubmissionWizard::new(draft());
        assert_eq!(wizard.advance().unwrap(), WizardStep::Tracks);

        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, WizardError::SectionInvalid { step: WizardStep::Tracks, .. }));
        assert_eq!(wizard.step(), WizardStep::Tracks);

        assert_eq!(wizard.back().unwrap(), WizardStep::Album);
        assert_eq!(wizard.back().unwrap(), WizardStep::Album);
    }

    #[tokio::test]
    async fn full_walk_through_to_submission() {
        let mut wizard = SubmissionWizard::new(draft());
        wizard.advance().unwrap();
        add_track(wizard.release_mut());
        wizard.advance().unwrap();

        assert!(wizard.advance().is_err());
        let files = &mut wizard.release_mut().files;
        files.cover_image = Some(FileRef::named("cover.jpg"));
        files.audio_files.push(FileRef::named("01.wav"));
        assert_eq!(wizard.advance().unwrap(), WizardStep::Distribution);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Marketing);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Review);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Review);

        let bus = InMemoryEventBus::new();
        assert!(!wizard.can_submit());
        assert!(matches!(
            wizard.submit(&AcceptingService, &bus).await,
            Err(WizardError::Submission(SubmissionError::TermsNotAccepted))
        ));

        wizard.accept_terms(true);
        assert!(wizard.can_submit());
        let id = wizard.submit(&AcceptingService, &bus).await.unwrap();
        assert_eq!(id, SubmissionId("sub-42".into()));
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert!(matches!(wizard.back(), Err(WizardError::AlreadySubmitted)));
        assert_eq!(bus.len(), 1);
    }

    #[tokio::test]
    async fn submit_requires_review_step() {
        let mut wizard = SubmissionWizard::new(draft());
        wizard.accept_terms(true);
        let bus = InMemoryEventBus::new();
        assert!(matches!(
            wizard.submit(&AcceptingService, &bus).await,
            Err(WizardError::NotAtReview(WizardStep::Album))
        ));
    }
}
