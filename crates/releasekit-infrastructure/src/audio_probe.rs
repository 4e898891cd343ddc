// SPDX-License-Identifier: GPL-3.0-or-later

//! Audio inspection backed by lofty.
//!
//! Reads container properties and tags; samples are not decoded, so the
//! waveform is left empty.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lofty::file::{AudioFile, FileType, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::Accessor;
use releasekit_application::upload::{AudioMetadata, TechnicalInfo};
use releasekit_application::{
    calculate_quality_score, AudioProcessingResult, AudioProcessor, UploadError, UploadFile,
};
use tracing::debug;

/// Resolves upload files on the local filesystem and probes them.
///
/// A file's `uri` is used as its path when present, otherwise its name is
/// joined onto the base directory.
#[derive(Debug, Clone)]
pub struct LoftyAudioProcessor {
    base_dir: PathBuf,
}

impl LoftyAudioProcessor {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, file: &UploadFile) -> PathBuf {
        match &file.uri {
            Some(uri) => PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri)),
            None => self.base_dir.join(&file.name),
        }
    }
}

#[async_trait]
impl AudioProcessor for LoftyAudioProcessor {
    async fn process(&self, file: &UploadFile) -> Result<AudioProcessingResult, UploadError> {
        let path = self.path_for(file);
        debug!(target: "upload", path = %path.display(), "probing audio file");
        tokio::task::spawn_blocking(move || probe(&path))
            .await
            .map_err(|e| UploadError::Processing(e.to_string()))?
    }
}

fn probe(path: &Path) -> Result<AudioProcessingResult, UploadError> {
    let tagged_file = Probe::open(path)
        .map_err(|e| UploadError::Processing(e.to_string()))?
        .read()
        .map_err(|e| UploadError::Processing(e.to_string()))?;

    let properties = tagged_file.properties();
    let technical_info = TechnicalInfo {
        format: format_name(tagged_file.file_type()),
        duration_secs: properties.duration().as_secs_f64(),
        sample_rate: properties.sample_rate().unwrap_or(0),
        bit_depth: properties.bit_depth().map(u16::from).unwrap_or(0),
        channels: properties.channels().map(u16::from).unwrap_or(0),
        bitrate_kbps: properties.audio_bitrate(),
    };

    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());
    let metadata = AudioMetadata {
        title: tag.and_then(|t| t.title().map(|s| s.to_string())),
        artist: tag.and_then(|t| t.artist().map(|s| s.to_string())),
        album: tag.and_then(|t| t.album().map(|s| s.to_string())),
    };

    Ok(AudioProcessingResult {
        quality_score: calculate_quality_score(&technical_info),
        technical_info,
        metadata,
        waveform: Vec::new(),
    })
}

fn format_name(file_type: FileType) -> String {
    match file_type {
        FileType::Flac => "FLAC".to_string(),
        FileType::Wav => "WAV".to_string(),
        FileType::Aiff => "AIFF".to_string(),
        FileType::Mpeg => "MP3".to_string(),
        FileType::Mp4 => "M4A".to_string(),
        other => format!("{other:?}").to_ascii_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn missing_file_is_a_processing_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let processor = LoftyAudioProcessor::new(dir.path());
        let err = processor
            .process(&UploadFile::new("absent.wav", 1024))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Processing(_)));
    }

    #[tokio::test]
    async fn garbage_bytes_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("noise.flac");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(b"definitely not audio").expect("write file");

        let processor = LoftyAudioProcessor::new(dir.path());
        let result = processor.process(&UploadFile::new("noise.flac", 20)).await;
        assert!(matches!(result, Err(UploadError::Processing(_))));
    }

    #[test]
    fn uri_takes_precedence_over_name() {
        let processor = LoftyAudioProcessor::new("/uploads");
        let mut file = UploadFile::new("01.wav", 10);
        assert_eq!(processor.path_for(&file), PathBuf::from("/uploads/01.wav"));
        file.uri = Some("file:///tmp/master.wav".into());
        assert_eq!(processor.path_for(&file), PathBuf::from("/tmp/master.wav"));
    }

    #[test]
    fn format_names_match_quality_table() {
        assert_eq!(format_name(FileType::Flac), "FLAC");
        assert_eq!(format_name(FileType::Mpeg), "MP3");
        assert_eq!(format_name(FileType::Opus), "OPUS");
    }
}
