mod common;

use common::{bar, series};
use market_data::models::bar::Bar;
use screener::{
    detect::pattern::detect_patterns,
    signals::PatternKind,
};

/// A series whose every consecutive pair diverges: alternating
/// +1.5%/-35% and -1.5%/+35% moves.
fn alternating_series(n: usize) -> Vec<Bar> {
    let mut close = 100.0_f64;
    let mut volume = 1_000_000.0_f64;
    let mut bars = vec![bar(0, close, volume as u64)];

    for day in 1..n as u32 {
        if day % 2 == 1 {
            close *= 1.015;
            volume *= 0.65;
        } else {
            close *= 0.985;
            volume *= 1.35;
        }
        bars.push(bar(day, close, volume.round() as u64));
    }
    bars
}

#[test]
fn series_shorter_than_2_bars_is_empty() {
    assert!(detect_patterns(&series("TEST.JK", vec![])).unwrap().is_empty());
    assert!(
        detect_patterns(&series("TEST.JK", vec![bar(0, 100.0, 1_000)]))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn only_last_three_patterns_survive_oldest_first() {
    // 10 bars, 9 qualifying pairs; only the newest 3 are reported.
    let bars = alternating_series(10);
    let s = series("TEST.JK", bars);
    let patterns = detect_patterns(&s).unwrap();

    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns[0].date, s.bars[7].date);
    assert_eq!(patterns[1].date, s.bars[8].date);
    assert_eq!(patterns[2].date, s.bars[9].date);
    assert!(patterns[0].date < patterns[1].date && patterns[1].date < patterns[2].date);

    // kinds alternate with the construction
    assert_eq!(patterns[0].kind, PatternKind::PriceUpVolumeDown);
    assert_eq!(patterns[1].kind, PatternKind::PriceDownVolumeUp);
    assert_eq!(patterns[2].kind, PatternKind::PriceUpVolumeDown);
}

#[test]
fn window_is_trailing_ten_bars() {
    // A divergence 12 sessions back falls outside the 10-bar window.
    let mut bars: Vec<Bar> = (0..15).map(|d| bar(d, 100.0, 1_000)).collect();
    bars[3].close = 102.0;
    bars[3].volume = 600;
    bars[4].close = 102.0; // recover volume without a qualifying move
    bars[4].volume = 640;
    for b in &mut bars[5..] {
        b.close = 102.0;
    }
    let patterns = detect_patterns(&series("TEST.JK", bars)).unwrap();
    assert!(patterns.is_empty());
}

#[test]
fn pattern_carries_the_computed_changes() {
    let s = series(
        "TEST.JK",
        vec![bar(0, 100.0, 1_000), bar(1, 98.5, 1_400)],
    );
    let patterns = detect_patterns(&s).unwrap();
    assert_eq!(patterns.len(), 1);

    let p = &patterns[0];
    assert_eq!(p.ticker, "TEST.JK");
    assert_eq!(p.kind, PatternKind::PriceDownVolumeUp);
    assert!((p.price_change_pct - -1.5).abs() < 1e-9);
    assert!((p.volume_change_pct - 40.0).abs() < 1e-9);
    assert_eq!(p.close, 98.5);
}
