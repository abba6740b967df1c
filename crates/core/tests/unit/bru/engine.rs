//! Predictor Engine Tests.
//!
//! Construction from configuration, rejection of unusable widths, and that the
//! engine is a transparent dispatcher over the selected scheme.

use bpsim_core::bru::gshare::GSharePredictor;
use bpsim_core::bru::tournament::TournamentPredictor;
use bpsim_core::common::MAX_HISTORY_BITS;
use bpsim_core::{BranchPredictor, Config, ConfigError, PredictorEngine, PredictorType};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{N, T, config, drive};

fn mixed_trace() -> Vec<(u32, bpsim_core::Outcome)> {
    let pcs = [0x40_0100, 0x40_0104, 0x40_0200, 0x40_0100];
    (0..200u32)
        .map(|i| {
            let pc = pcs[(i as usize) % pcs.len()];
            let taken = (i * 7 + pc) % 3 != 0;
            (pc, taken.into())
        })
        .collect()
}

#[rstest]
#[case(PredictorType::Static, "Static")]
#[case(PredictorType::GShare, "Gshare")]
#[case(PredictorType::Tournament, "Tournament")]
#[case(PredictorType::Custom, "Custom")]
fn builds_selected_scheme(#[case] predictor: PredictorType, #[case] name: &str) {
    let engine = PredictorEngine::new(&config(predictor, 4, 4, 4)).unwrap();
    assert_eq!(engine.predictor_type(), predictor);
    assert_eq!(engine.name(), name);
    assert_eq!(predictor.name(), name);
}

#[rstest]
#[case(MAX_HISTORY_BITS + 1, 0, 0, "ghistory_bits")]
#[case(0, MAX_HISTORY_BITS + 1, 0, "lhistory_bits")]
#[case(0, 0, 64, "pc_index_bits")]
fn rejects_oversized_widths(
    #[case] g: u32,
    #[case] l: u32,
    #[case] p: u32,
    #[case] expected_field: &str,
) {
    let err = PredictorEngine::new(&config(PredictorType::Tournament, g, l, p)).unwrap_err();
    match err {
        ConfigError::BitsOutOfRange { field, bits, max } => {
            assert_eq!(field, expected_field);
            assert_eq!(max, MAX_HISTORY_BITS);
            assert!(bits > max);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_widths_are_valid() {
    let mut engine = PredictorEngine::new(&config(PredictorType::Tournament, 0, 0, 0)).unwrap();
    assert_eq!(engine.predict(0xFFFF_FFFF), N);
    engine.train(0xFFFF_FFFF, T);
}

#[test]
fn static_engine_always_taken() {
    let mut engine = PredictorEngine::new(&Config::with_predictor(PredictorType::Static)).unwrap();
    let predictions = drive(&mut engine, &mixed_trace());
    assert!(predictions.iter().all(|&p| p == T));
}

#[test]
fn gshare_engine_matches_direct_predictor() {
    let trace = mixed_trace();
    let mut engine = PredictorEngine::new(&config(PredictorType::GShare, 6, 0, 0)).unwrap();
    let mut direct = GSharePredictor::new(6);
    assert_eq!(drive(&mut engine, &trace), drive(&mut direct, &trace));
}

#[test]
fn tournament_engine_matches_direct_predictor() {
    let trace = mixed_trace();
    let cfg = config(PredictorType::Tournament, 5, 4, 3);
    let mut engine = PredictorEngine::new(&cfg).unwrap();
    let mut direct = TournamentPredictor::new(&cfg);
    assert_eq!(drive(&mut engine, &trace), drive(&mut direct, &trace));
}

#[test]
fn engines_from_same_config_are_independent() {
    let cfg = config(PredictorType::GShare, 0, 0, 0);
    let mut a = PredictorEngine::new(&cfg).unwrap();
    let b = PredictorEngine::new(&cfg).unwrap();
    a.train(0x4, T);
    assert_eq!(a.predict(0x4), T);
    assert_eq!(b.predict(0x4), N);
}
