//! End-to-end use of the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use interptable::utils::{linspace, logspace, tabulate_2d};
use interptable::{
    AxisConfig, Interpolant, Interpolant2D, SampledAxis, Table1D, Table2D, TableBuilder,
    TableError,
};

/// y = x^2 sampled at 0..=4
#[test]
fn test_parabola() {
    let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
    let f = [0.0_f64, 1.0, 4.0, 9.0, 16.0];

    let linear = Table1D::new(&x[..], &f[..], Interpolant::Linear).unwrap();
    assert_eq!(linear.eval(2.5), 6.5);
    assert_eq!(linear.eval(3.5), 12.5);
    assert_eq!(linear.eval(-1.0), 0.0);
    assert_eq!(linear.eval(0.0), 0.0);
    assert_eq!(linear.eval(4.0), 16.0);
    assert_eq!(linear.arg_min(), 0.0);
    assert_eq!(linear.arg_max(), 4.0);
    assert_eq!(linear.size(), 5);

    let spline = Table1D::new(&x[..], &f[..], Interpolant::Spline).unwrap();
    assert_relative_eq!(spline.eval(2.5), 6.25, max_relative = 0.02);
    // Closer to the truth in the interior than near the free ends
    assert!((spline.eval(2.0 + 1e-3) - 4.004).abs() < (spline.eval(0.5) - 0.25).abs());

    let floor = Table1D::new(&x[..], &f[..], Interpolant::Floor).unwrap();
    let ceil = Table1D::new(&x[..], &f[..], Interpolant::Ceil).unwrap();
    let nearest = Table1D::new(&x[..], &f[..], Interpolant::Nearest).unwrap();
    assert_eq!(floor.eval(2.5), 4.0);
    assert_eq!(ceil.eval(2.5), 9.0);
    assert_eq!(nearest.eval(2.4), 4.0);
    assert_eq!(nearest.eval(2.5), 9.0);
}

/// A radial brightness profile sampled on a log grid, scanned outward
/// then queried at random; both orders give the same answers
#[test]
fn test_profile_scan_order() {
    let r = logspace(-2.0_f64, 1.0, 200);
    let f: Vec<f64> = r.iter().map(|&ri| (-ri).exp() / (1.0 + ri * ri)).collect();
    let table = Table1D::new(r.clone(), f, Interpolant::Spline).unwrap();
    assert!(!table.axis().is_uniform());

    let scan = linspace(0.01_f64, 10.0, 1000);
    let forward = table.interp_many_alloc(&scan);

    let reversed: Vec<f64> = scan.iter().rev().copied().collect();
    let mut backward = table.interp_many_alloc(&reversed);
    backward.reverse();
    assert_eq!(forward, backward);

    for (k, &a) in scan.iter().enumerate() {
        let truth = (-a).exp() / (1.0 + a * a);
        assert_abs_diff_eq!(forward[k], truth, epsilon = 1e-4);
    }
}

#[test]
fn test_builder_to_table() {
    let mut builder = TableBuilder::with_config(
        Interpolant::Linear,
        AxisConfig::default().detect_uniform(false),
    );
    for i in 0..=10 {
        let x = i as f64 / 10.0;
        builder.add_entry(x, 1.0 - x).unwrap();
    }
    builder.finalize().unwrap();

    let table = builder.into_table().unwrap();
    assert!(!table.axis().is_uniform());
    assert_abs_diff_eq!(table.eval(0.25), 0.75, epsilon = 1e-12);
}

#[test]
fn test_surface_2d() {
    let x = linspace(0.0_f64, 1.0, 21);
    let y = logspace(0.0_f64, 1.0, 15);
    let f = tabulate_2d(&x, &y, |a: f64, b: f64| a * b + 2.0 * b);
    let table = Table2D::new(&x[..], &y[..], &f[..], Interpolant2D::Linear).unwrap();

    assert_eq!(table.shape(), (21, 15));
    assert_eq!((table.x_min(), table.x_max()), (0.0, 1.0));
    assert_eq!(table.y_min(), 1.0);
    assert_relative_eq!(table.y_max(), 10.0, max_relative = 1e-12);

    let xs = linspace(0.0_f64, 1.0, 50);
    let ys = linspace(1.0_f64, 10.0, 50);
    let mut dfdx = vec![0.0; 50];
    let mut dfdy = vec![0.0; 50];
    table.gradient_many(&xs, &ys, &mut dfdx, &mut dfdy).unwrap();
    let vals = table.interp_many_alloc(&xs, &ys).unwrap();

    for k in 0..xs.len() {
        assert_relative_eq!(vals[k], xs[k] * ys[k] + 2.0 * ys[k], max_relative = 1e-12);
        assert_relative_eq!(dfdx[k], ys[k], max_relative = 1e-9);
        assert_relative_eq!(dfdy[k], xs[k] + 2.0, max_relative = 1e-9);
    }

    let mut short = vec![0.0; 49];
    assert!(matches!(
        table.gradient_many(&xs, &ys, &mut dfdx, &mut short),
        Err(TableError::LengthMismatch { expected: 50, got: 49 })
    ));

    let nearest = Table2D::new(&x[..], &y[..], &f[..], "nearest".parse().unwrap()).unwrap();
    let err = nearest.gradient(0.5, 2.0).unwrap_err();
    assert_eq!(err.to_string(), "gradient not implemented for nearest interp");
}

/// One clone per worker thread
#[test]
fn test_clone_per_thread() {
    let x = logspace(0.0_f64, 3.0, 64);
    let f: Vec<f64> = x.iter().map(|v| v.ln()).collect();
    let table = Table1D::new(x, f, Interpolant::Linear).unwrap();

    let queries = linspace(1.0_f64, 1000.0, 4000);
    let expected = table.interp_many_alloc(&queries);

    let results: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = queries
            .chunks(1000)
            .map(|chunk| {
                let table = table.clone();
                s.spawn(move || table.interp_many_alloc(chunk))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.concat(), expected);
}

#[test]
fn test_axis_standalone() {
    let axis = SampledAxis::new(vec![0.0_f32, 0.5, 2.0, 2.5]).unwrap();
    assert_eq!(axis.upper_index(-1.0), 1);
    assert_eq!(axis.upper_index(1.0), 2);
    assert_eq!(axis.upper_index(2.25), 3);
    assert_eq!(axis.upper_index(9.0), 3);
    assert!(axis.contains(2.5));
    assert!(!axis.contains(2.6));
}

#[cfg(feature = "serde")]
#[test]
fn test_text_round_trip() {
    let x = linspace(0.0_f64, 3.0, 7);
    let f: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let table = Table1D::new(&x[..], &f[..], Interpolant::Spline).unwrap();

    let text = table.to_text().unwrap();
    assert!(text.starts_with(r#"{"interpolant":"spline""#));
    let copy = Table1D::<f64>::from_text(&text).unwrap();
    assert_eq!(copy, table);
    assert_eq!(copy.eval(1.1), table.eval(1.1));
}
