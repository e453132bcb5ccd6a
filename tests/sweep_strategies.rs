use angledrift::lowlevel::{polar_iteration, rotation_inc_iteration, rotation_iteration, sweep_len};
use angledrift::{measure, Collector, Measurement, Recovery, Strategy, Vector2D};
use std::f64::consts::TAU;

fn collect_samples(strategy: Strategy, increment: f64) -> Vec<(Vector2D, f64)> {
    let mut out = Vec::new();
    strategy
        .sweep(increment, |v, theta| {
            out.push((v, theta));
            Ok(())
        })
        .unwrap();
    out
}

#[test]
fn free_functions_match_strategy_dispatch() {
    let increment = 0.25;
    let mut direct = Vec::new();
    rotation_iteration(increment, |v, t| {
        direct.push((v, t));
        Ok(())
    })
    .unwrap();
    let mut accumulating = Vec::new();
    rotation_inc_iteration(increment, |v, t| {
        accumulating.push((v, t));
        Ok(())
    })
    .unwrap();
    let mut polar = Vec::new();
    polar_iteration(increment, |v, t| {
        polar.push((v, t));
        Ok(())
    })
    .unwrap();

    assert_eq!(direct, collect_samples(Strategy::Direct, increment));
    assert_eq!(accumulating, collect_samples(Strategy::Accumulating, increment));
    assert_eq!(polar, collect_samples(Strategy::Polar, increment));
}

#[test]
fn angles_increase_strictly() {
    for strategy in Strategy::ALL {
        let samples = collect_samples(strategy, 0.01);
        assert_eq!(samples.len(), sweep_len(0.01).unwrap());
        assert_eq!(samples[0].1, 0.0);
        for pair in samples.windows(2) {
            assert!(pair[1].1 > pair[0].1, "{strategy:?} not increasing");
        }
        assert!(samples.last().unwrap().1 <= TAU);
    }
}

#[test]
fn index_driven_sweeps_stop_at_full_turn() {
    // 1000 steps of this size overshoot 2π by about 2e-11.
    let increment = 0.0062831853072;
    for strategy in [Strategy::Direct, Strategy::Polar] {
        let samples = collect_samples(strategy, increment);
        assert_eq!(samples.len(), 1000, "{strategy:?}");
        let last = samples.last().unwrap().1;
        assert!(last <= TAU, "{strategy:?} last angle {last}");
        assert!(last + increment > TAU);
    }
    assert_eq!(collect_samples(Strategy::Accumulating, increment).len(), 1000);
}

#[test]
fn direct_and_polar_share_angles_and_vectors() {
    for divisor in [4.0, 6.0, 360.0, 1000.0] {
        let increment = TAU / divisor;
        let direct = collect_samples(Strategy::Direct, increment);
        let polar = collect_samples(Strategy::Polar, increment);
        assert_eq!(direct.len(), polar.len());
        for ((dv, dt), (pv, pt)) in direct.iter().zip(polar.iter()) {
            assert_eq!(dt, pt);
            assert!((dv.x - pv.x).abs() < 1e-14);
            assert!((dv.y - pv.y).abs() < 1e-14);
        }
    }
}

#[test]
fn accumulating_drift_exceeds_direct_error() {
    let increment = 1e-3;
    let direct = measure(
        &Measurement::paired(Strategy::Direct, Recovery::Atan2, increment),
        &mut Collector::new(),
    )
    .unwrap();

    let mut sink = Collector::new();
    let accumulating = measure(
        &Measurement::paired(Strategy::Accumulating, Recovery::Atan2, increment),
        &mut sink,
    )
    .unwrap();

    assert!(
        accumulating.max_delta > direct.max_delta,
        "accumulating {} vs direct {}",
        accumulating.max_delta,
        direct.max_delta
    );

    // Error builds up over the sweep: late samples are worse than early ones.
    let records = sink.records();
    let window = 500;
    let early: f64 = records[1..=window].iter().map(|r| r.delta).sum();
    let late: f64 = records[records.len() - window..]
        .iter()
        .map(|r| r.delta)
        .sum();
    assert!(late > early, "late {late} vs early {early}");
}

#[test]
fn accumulating_vectors_stay_near_unit_length() {
    let samples = collect_samples(Strategy::Accumulating, 1e-3);
    for (v, _) in samples {
        assert!((v.length() - 1.0).abs() < 1e-9);
    }
}
