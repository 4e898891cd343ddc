// SPDX-License-Identifier: GPL-3.0-or-later
pub mod audio_probe;
pub mod submission_client;

pub use audio_probe::LoftyAudioProcessor;
pub use submission_client::HttpSubmissionService;
