//! Queue-overflow boundary tests: arrivals flooding a permanently busy
//! station must fail exactly when the queue would exceed its capacity.

use tandem_core::{
    run_replications, Replication, ScriptedUniform, SeededUniform, SimConfig, SimError, StationId,
};

/// Near-zero interarrival times against an enormous service time keep the
/// server busy forever while the queue fills.
fn overload_config(queue_capacity: usize) -> SimConfig {
    SimConfig::new(0.1, 1000.0, 0.3, 100.0)
        .unwrap()
        .with_queue_capacity(queue_capacity)
}

#[test]
fn overflow_fires_exactly_when_capacity_would_be_exceeded() {
    let config = overload_config(4);
    // Constant draws of 0.5: every interarrival is ~0.069, every service
    // ~693, so the first customer holds the server for the whole run.
    // Draw order: initial arrival, then per arrival the next-arrival draw
    // (plus one service draw for the first customer only).
    let mut source = ScriptedUniform::new([0.5; 8]);

    let mut replication = Replication::new(config, &mut source);
    let mut arrivals = 0_usize;
    let result = loop {
        match replication.step(&mut source) {
            Ok(_) => arrivals += 1,
            Err(err) => break err,
        }
    };

    // Arrival 1 goes into service; arrivals 2-5 fill the queue of 4; the
    // 6th arrival is the first that cannot be stored.
    assert_eq!(arrivals, 5);
    match result {
        SimError::QueueOverflow {
            station,
            time,
            capacity,
        } => {
            assert_eq!(station, StationId::First);
            assert_eq!(capacity, 4);
            assert!(time > tandem_core::SimTime::zero());
        }
        other => panic!("expected queue overflow, got: {other}"),
    }
}

#[test]
fn seeded_overload_also_overflows() {
    let mut source = SeededUniform::new(5);
    let err = Replication::new(overload_config(16), &mut source)
        .run(&mut source)
        .unwrap_err();

    assert!(matches!(
        err,
        SimError::QueueOverflow {
            station: StationId::First,
            capacity: 16,
            ..
        }
    ));
}

#[test]
fn overflow_aborts_the_whole_replication_batch() {
    let mut source = SeededUniform::new(5);
    let result = run_replications(overload_config(16), &mut source, 10);
    assert!(result.is_err());
}

#[test]
fn ample_capacity_runs_to_completion() {
    // Same load, but a queue deep enough to absorb every arrival in the
    // run (~100 / 0.1 = ~1000 expected arrivals).
    let mut source = SeededUniform::new(5);
    let report = Replication::new(overload_config(5000), &mut source)
        .run(&mut source)
        .unwrap();

    // Only the first customer ever started service at station 1.
    assert_eq!(report.customers_delayed(), 1);
    assert!(report.avg_queue_length(StationId::First) > 100.0);
}
