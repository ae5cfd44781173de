use super::*;
use crate::helpers::utils::create_collecting_logger;

#[test]
fn can_collect_metrics_only_for_tracked_generations() {
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics { track_best: 2 });

    telemetry.on_initial(10, 3);
    (0..5).for_each(|generation| telemetry.on_generation(generation, 10. - generation as f64, Timer::start(), true));
    telemetry.on_result(&OptimizationResult::default());
    let metrics = telemetry.take_metrics().expect("no metrics");

    assert_eq!(metrics.generations, 5);
    assert_eq!(metrics.evolution.iter().map(|generation| generation.number).collect::<Vec<_>>(), vec![0, 2, 4]);
    assert_eq!(metrics.evolution[1].best_distance, 8.);
    assert!(metrics.evolution.iter().all(|generation| generation.is_improvement));
}

#[test]
fn can_log_messages_when_logging_is_enabled() {
    let (logger, messages) = create_collecting_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 10 });

    telemetry.on_initial(100, 5);
    (0..21).for_each(|generation| telemetry.on_generation(generation, 1., Timer::start(), false));
    telemetry.on_result(&OptimizationResult::default());

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0], "created initial population of 100 routes over 5 stops");
    assert!(messages[1].contains("generation 0 took"));
    assert!(messages[3].contains("generation 20 took"));
    assert!(messages[4].contains("total generations: 21"));
    assert!(telemetry.take_metrics().is_none());
}

#[test]
fn can_keep_silent_without_telemetry() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_generation(0, 1., Timer::start(), true);
    telemetry.log("message");

    assert!(telemetry.take_metrics().is_none());
}

#[test]
fn can_log_and_track_in_all_mode() {
    let (logger, messages) = create_collecting_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::All { logger, log_best: 1, track_best: 1 });

    telemetry.on_generation(0, 3., Timer::start(), true);
    telemetry.on_generation(1, 3., Timer::start(), false);

    assert_eq!(messages.lock().unwrap().len(), 2);
    assert!(messages.lock().unwrap()[0].ends_with("(improved)"));
    assert_eq!(telemetry.take_metrics().map(|metrics| metrics.evolution.len()), Some(2));
}
