use log::debug;

use super::numeric::round1;
use crate::models::{EventType, ScanEvent, ScanType};
use crate::routes::summary::{ImageQrRatio, ScanSummary, SuccessHealth};

/// Success rate at or above which the dashboard shows a healthy badge.
pub const HEALTHY_SUCCESS_RATE: u32 = 80;

/// Summarize scan outcomes.
///
/// Image and QR counts include successful scans only. The success rate is
/// rounded to the nearest integer and the failure rate is its complement, so
/// the two always add up to 100; with no attempts the success rate is 0.
/// Events without a usable timestamp are still counted.
pub fn summarize(events: &[ScanEvent]) -> ScanSummary {
    let mut total_success_scans = 0usize;
    let mut image_scans = 0usize;
    let mut qr_scans = 0usize;
    let mut audio_plays = 0usize;
    let mut failures = 0usize;

    for event in events {
        match event.event_type {
            EventType::ScanSuccess => {
                total_success_scans += 1;
                match event.scan_type {
                    ScanType::Image => image_scans += 1,
                    ScanType::Qr => qr_scans += 1,
                    ScanType::Other(_) => {}
                }
            }
            EventType::ScanFail => failures += 1,
            EventType::PlayAudioGuide => audio_plays += 1,
            EventType::Other(_) => {}
        }
    }

    let total_attempts = total_success_scans + failures;
    let success_rate_percent = if total_attempts == 0 {
        0
    } else {
        (total_success_scans as f64 / total_attempts as f64 * 100.0).round() as u32
    };
    let failure_rate_percent = 100 - success_rate_percent;

    let image_to_qr_ratio = if qr_scans > 0 {
        ImageQrRatio::Defined(image_scans as f64 / qr_scans as f64)
    } else {
        ImageQrRatio::Undefined
    };

    // Events are treated as spread over at least one minute
    let minutes = (events.len() as f64 / 60.0).max(1.0);
    let avg_attempts_per_minute = round1(total_attempts as f64 / minutes);

    let health = if success_rate_percent >= HEALTHY_SUCCESS_RATE {
        SuccessHealth::Healthy
    } else {
        SuccessHealth::Degraded
    };

    debug!(
        "Summarized {} events: {} successes, {} failures ({}%)",
        events.len(),
        total_success_scans,
        failures,
        success_rate_percent
    );

    ScanSummary {
        total_events: events.len(),
        total_success_scans,
        image_scans,
        qr_scans,
        audio_plays,
        failures,
        total_attempts,
        success_rate_percent,
        failure_rate_percent,
        image_to_qr_ratio,
        avg_attempts_per_minute,
        health,
    }
}
