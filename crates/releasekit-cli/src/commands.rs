// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use releasekit_application::{
    available_territories, effective_release_moment, load_release, resolve_territories,
    submit_release, AppState, FieldKind, FieldRules, InMemoryEventBus, UploadFile, UploadStatus,
};
use releasekit_domain::reference::DSPS;
use releasekit_domain::{Issue, QcReport, Release};
use releasekit_infrastructure::{HttpSubmissionService, LoftyAudioProcessor};
use tracing::info;

fn read_release(path: &Path) -> Result<Release> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let release = load_release(&input).with_context(|| format!("failed to load {}", path.display()))?;
    info!(target: "cli", release_id = %release.id, tracks = release.tracks.len(), "release loaded");
    Ok(release)
}

fn format_issue(issue: &Issue) -> String {
    let mut line = format!("[{}] {}: {}", issue.severity, issue.field, issue.message);
    if let Some(suggestion) = &issue.suggestion {
        line.push_str(&format!(" (suggestion: {suggestion})"));
    }
    line
}

fn print_report(report: &QcReport) {
    for issue in report.iter() {
        println!("{}", format_issue(issue));
    }
    println!(
        "{} error(s), {} warning(s), {} notice(s)",
        report.errors.len(),
        report.warnings.len(),
        report.info.len()
    );
}

pub fn validate(state: &AppState, file: &Path, today: Option<NaiveDate>, json: bool) -> Result<()> {
    let release = read_release(file)?;
    let mut validator = state.validator();
    if let Some(today) = today {
        validator = validator.with_reference_date(today);
    }
    let report = validator.validate(&release);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.has_errors() {
        bail!("release has {} QC error(s)", report.errors.len());
    }
    Ok(())
}

pub fn field(kind: &str, value: &str, language: Option<&str>) -> Result<()> {
    let Some(kind) = FieldKind::from_name(kind) else {
        bail!("unknown field '{kind}'");
    };
    let issues = FieldRules::default().validate_in(kind, value, language);
    if issues.is_empty() {
        println!("ok");
    }
    for issue in &issues {
        println!("{}", format_issue(issue));
    }
    Ok(())
}

fn target_dsps(release: &Release, requested: &[String]) -> Vec<String> {
    if !requested.is_empty() {
        return requested.to_vec();
    }
    if !release.platforms.is_empty() {
        return release.platforms.iter().cloned().collect();
    }
    DSPS.iter().map(|dsp| dsp.id.to_string()).collect()
}

pub fn territories(file: &Path, dsps: &[String], available: bool) -> Result<()> {
    let release = read_release(file)?;
    for dsp in target_dsps(&release, dsps) {
        let countries = if available {
            available_territories(&release, &dsp)
        } else {
            resolve_territories(&release, &dsp)
        };
        let codes: Vec<&str> = countries.iter().map(|code| code.as_str()).collect();
        println!("{dsp} ({}): {}", codes.len(), codes.join(" "));
    }
    Ok(())
}

pub fn release_time(state: &AppState, file: &Path) -> Result<()> {
    let release = read_release(file)?;
    let resolver = state.release_time();

    let instant = resolver.release_instant(&release)?;
    println!("release: {}", instant.to_rfc3339());
    for projection in resolver.project(instant) {
        println!("  {:<20} {}", projection.label, projection.display);
    }

    for (index, track) in release.tracks.iter().enumerate() {
        if track.custom_release.is_none() {
            continue;
        }
        let instant = resolver.track_instant(&release, track)?;
        let moment = effective_release_moment(&release, track);
        println!(
            "track {} '{}': {} ({})",
            index + 1,
            track.title,
            instant.to_rfc3339(),
            moment.map(|m| m.timezone).unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn submit(state: &AppState, file: &Path, accept_terms: bool) -> Result<()> {
    let release = read_release(file)?;
    let service = HttpSubmissionService::from_config(&state.config.submission)?;
    let bus = InMemoryEventBus::new();

    let receipt = submit_release(&release, &state.validator(), accept_terms, &service, &bus).await;
    for event in bus.drain() {
        info!(target: "cli", event = %event["name"], "domain event");
    }
    let receipt = receipt?;

    println!("submitted: {}", receipt.submission_id);
    if receipt.report.has_warnings() {
        print_report(&receipt.report);
    }
    Ok(())
}

fn upload_file(path: &Path) -> Result<UploadFile> {
    let size = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut file = UploadFile::new(name, size);
    file.uri = Some(path.display().to_string());
    Ok(file)
}

pub async fn probe(state: &AppState, files: &[PathBuf]) -> Result<()> {
    let queue = state.upload_queue(LoftyAudioProcessor::new("."));
    let mut queued = Vec::new();
    for path in files {
        let file = upload_file(path)?;
        match queue.add(file.clone()) {
            Ok(id) => queued.push((id, file)),
            Err(err) => println!("{}: rejected: {err}", path.display()),
        }
    }
    queue.wait_idle().await;

    for (id, file) in queued {
        match queue.status(id) {
            Some(UploadStatus::Completed(result)) => {
                let info = &result.technical_info;
                println!(
                    "{}: {} {} Hz {}-bit {}ch {:.1}s quality {}",
                    file.name,
                    info.format,
                    info.sample_rate,
                    info.bit_depth,
                    info.channels,
                    info.duration_secs,
                    result.quality_score
                );
            }
            Some(UploadStatus::Failed(reason)) => println!("{}: failed: {reason}", file.name),
            Some(UploadStatus::Processing) | None => println!("{}: not processed", file.name),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use releasekit_domain::{AlbumType, IssueCode};

    #[test]
    fn issue_lines_include_suggestions() {
        let issue = Issue::warning(IssueCode::TitleCase, "tracks[0].title").with_suggestion("Blue Hour");
        assert_eq!(
            format_issue(&issue),
            "[warning] tracks[0].title: English titles should use title case (suggestion: Blue Hour)"
        );
    }

    #[test]
    fn dsp_targets_fall_back_to_platforms_then_catalog() {
        let mut release = Release::new("Blue Hour", AlbumType::Single);
        assert_eq!(target_dsps(&release, &[]).len(), DSPS.len());
        release.platforms.insert("melon".into());
        assert_eq!(target_dsps(&release, &[]), vec!["melon".to_string()]);
        assert_eq!(
            target_dsps(&release, &["spotify".to_string()]),
            vec!["spotify".to_string()]
        );
    }

    #[test]
    fn reads_release_documents_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.json");
        let release = Release::new("Blue Hour", AlbumType::Single);
        std::fs::write(&path, serde_json::to_string(&release).unwrap()).unwrap();

        let loaded = read_release(&path).unwrap();
        assert_eq!(loaded, release);
        assert!(read_release(&dir.path().join("missing.json")).is_err());
    }
}
