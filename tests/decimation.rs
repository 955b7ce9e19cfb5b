mod common;

use common::{DrawCall, RecordingSurface, triangle_wave};
use oscilloscope_wasm::domain::scope::{ScopeConfig, ViewportModel};
use oscilloscope_wasm::domain::waveform::{Dataset, RenderStyle};
use oscilloscope_wasm::infrastructure::rendering::Renderer;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn visible_indices_stay_inside_window(n: u16, scale: f64, left: f64) -> TestResult {
    if !scale.is_finite() || !left.is_finite() {
        return TestResult::discard();
    }
    let config = ScopeConfig::default();
    let dataset = triangle_wave(n as usize);
    let mut vp = ViewportModel::new(&config, dataset.len(), 500.0);
    vp.set_scale(scale);
    vp.set_left_percent(left);

    let points = Renderer::new(&config).project(&vp, &dataset, 500.0, 200.0);
    let first_allowed = vp.percent_to_index(vp.left_percent()).ceil() as usize;
    let ok = points.iter().all(|p| {
        p.index >= first_allowed
            && p.index < dataset.len()
            && vp.index_to_percent(p.index as f64) < vp.right_percent()
    });
    let contiguous = points.windows(2).all(|w| w[1].index == w[0].index + 1);
    TestResult::from_bool(ok && contiguous)
}

#[quickcheck]
fn visible_count_bounded_by_window(n: u16) -> bool {
    let config = ScopeConfig::default();
    let dataset = triangle_wave(n as usize);
    let vp = ViewportModel::new(&config, dataset.len(), 500.0);
    let range = Renderer::visible_range(&vp, &dataset);
    // a third of the dataset plus at most one boundary sample
    range.len() as f64 <= dataset.len() as f64 / 3.0 + 1.0
}

fn four_samples() -> (ScopeConfig, Dataset) {
    let config = ScopeConfig { initial_scale: 1.0, ..Default::default() };
    (config, Dataset::from(vec![0.0, 50.0, -50.0, 100.0]))
}

#[test]
fn points_style_draws_one_circle_per_sample_in_one_path() {
    let (config, dataset) = four_samples();
    let vp = ViewportModel::new(&config, dataset.len(), 400.0);
    let mut surface = RecordingSurface::new(400.0, 200.0);
    let metrics = surface.metrics.clone();

    let stats = Renderer::new(&config).render(&mut surface, &metrics, &vp, &dataset).unwrap();

    assert_eq!(stats.visible, 4);
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Clear,
            DrawCall::BeginPath,
            DrawCall::MoveTo(3.0, 100.0),
            DrawCall::Arc(0.0, 100.0, 3.0),
            DrawCall::MoveTo(103.0, 50.0),
            DrawCall::Arc(100.0, 50.0, 3.0),
            DrawCall::MoveTo(203.0, 150.0),
            DrawCall::Arc(200.0, 150.0, 3.0),
            DrawCall::MoveTo(303.0, 0.0),
            DrawCall::Arc(300.0, 0.0, 3.0),
            DrawCall::Stroke,
        ]
    );
}

#[test]
fn polyline_style_connects_samples() {
    let (mut config, dataset) = four_samples();
    config.render_style = RenderStyle::Polyline;
    let vp = ViewportModel::new(&config, dataset.len(), 400.0);
    let mut surface = RecordingSurface::new(400.0, 200.0);
    let metrics = surface.metrics.clone();

    Renderer::new(&config).render(&mut surface, &metrics, &vp, &dataset).unwrap();

    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Clear,
            DrawCall::BeginPath,
            DrawCall::MoveTo(0.0, 100.0),
            DrawCall::LineTo(100.0, 50.0),
            DrawCall::LineTo(200.0, 150.0),
            DrawCall::LineTo(300.0, 0.0),
            DrawCall::Stroke,
        ]
    );
}

#[test]
fn empty_window_still_clears_and_strokes() {
    let config = ScopeConfig::default();
    let dataset = Dataset::from(Vec::new());
    let vp = ViewportModel::new(&config, 0, 400.0);
    let mut surface = RecordingSurface::new(400.0, 200.0);
    let metrics = surface.metrics.clone();

    let stats = Renderer::new(&config).render(&mut surface, &metrics, &vp, &dataset).unwrap();

    assert_eq!(stats.first_index, None);
    assert_eq!(surface.calls, vec![DrawCall::Clear, DrawCall::BeginPath, DrawCall::Stroke]);
}

#[test]
fn decimation_ignores_dataset_size() {
    let config = ScopeConfig { initial_scale: 10.0, ..Default::default() };
    let dataset = triangle_wave(200_000);
    let mut vp = ViewportModel::new(&config, dataset.len(), 800.0);
    vp.set_left_percent(0.45);

    let range = Renderer::visible_range(&vp, &dataset);
    assert_eq!(range.start, 90_000);
    assert!(range.len() <= 20_001);
}
