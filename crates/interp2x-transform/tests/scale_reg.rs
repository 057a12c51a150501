//! Scale regression test
//!
//! Exercises `process` dispatch for every method/operation pair on
//! synthetic grids: output dimensions, dimension rejection, source
//! immutability and the reduce-after-amplify size round trip.

use interp2x_core::{Grid, ImageFormat};
use interp2x_test::{RegParams, synthetic};
use interp2x_transform::{ScaleMethod, ScaleOp, TransformError, output_dimensions, process};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let grid = synthetic::gradient(64, 48).expect("gradient");
    let (w, h) = grid.dimensions();
    eprintln!("Grid size: {}x{}", w, h);

    // --- Test 1: output dimensions for every pair ---
    for method in ScaleMethod::ALL {
        for op in ScaleOp::ALL {
            let out = process(&grid, method, op).expect("process");
            let expected = output_dimensions(method, op, w, h).expect("dimensions");
            rp.compare_values(expected.0 as f64, out.width() as f64, 0.0);
            rp.compare_values(expected.1 as f64, out.height() as f64, 0.0);
            eprintln!("  {} {}: {}x{}", method, op, out.width(), out.height());
        }
    }

    // --- Test 2: amplify doubles, reduce halves ---
    let up = process(&grid, ScaleMethod::Bilinear, ScaleOp::Amplify).expect("amplify");
    rp.compare_values((w * 2) as f64, up.width() as f64, 0.0);
    rp.compare_values((h * 2) as f64, up.height() as f64, 0.0);
    let down = process(&grid, ScaleMethod::NearestNeighbor, ScaleOp::Reduce).expect("reduce");
    rp.compare_values((w / 2) as f64, down.width() as f64, 0.0);
    rp.compare_values((h / 2) as f64, down.height() as f64, 0.0);

    // --- Test 3: reduce(amplify(g)) restores even dimensions ---
    for method in ScaleMethod::ALL {
        for (gw, gh) in [(2, 2), (8, 6), (30, 4)] {
            let g = synthetic::noise(gw, gh, 7).expect("noise");
            let up = process(&g, method, ScaleOp::Amplify).expect("amplify");
            let back = process(&up, method, ScaleOp::Reduce).expect("reduce");
            rp.compare_values(gw as f64, back.width() as f64, 0.0);
            rp.compare_values(gh as f64, back.height() as f64, 0.0);
        }
    }

    // --- Test 4: reduce rejects width or height below 2 ---
    for method in ScaleMethod::ALL {
        for (gw, gh) in [(1, 1), (1, 9), (9, 1)] {
            let thin = synthetic::uniform(gw, gh, 100).expect("uniform");
            let rejected = matches!(
                process(&thin, method, ScaleOp::Reduce),
                Err(TransformError::InvalidDimension { .. })
            );
            rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
            rp.compare_values(
                1.0,
                if output_dimensions(method, ScaleOp::Reduce, gw, gh).is_none() {
                    1.0
                } else {
                    0.0
                },
                0.0,
            );

            // amplify has no lower bound
            let up = process(&thin, method, ScaleOp::Amplify).expect("amplify thin");
            rp.compare_values((gw * 2) as f64, up.width() as f64, 0.0);
            rp.compare_values((gh * 2) as f64, up.height() as f64, 0.0);
        }
    }

    // --- Test 5: source grid is never modified ---
    let before = grid.clone();
    for method in ScaleMethod::ALL {
        for op in ScaleOp::ALL {
            let _ = process(&grid, method, op).expect("process");
        }
    }
    rp.compare_grids(&before, &grid);

    // --- Test 6: same input, same output ---
    for method in ScaleMethod::ALL {
        for op in ScaleOp::ALL {
            let a = process(&grid, method, op).expect("first run");
            let b = process(&grid, method, op).expect("second run");
            rp.compare_grids(&a, &b);
        }
    }

    // --- Test 7: concrete 2x2 scenario ---
    let small = Grid::from_rows(&[[10u8, 20], [30, 40]]).expect("2x2");
    let bl = process(&small, ScaleMethod::Bilinear, ScaleOp::Reduce).expect("bilinear reduce");
    rp.compare_strings(&[25], bl.data());
    let nn = process(&small, ScaleMethod::NearestNeighbor, ScaleOp::Reduce).expect("nn reduce");
    rp.compare_strings(&[10], nn.data());

    // --- Test 8: golden output for the amplified gradient ---
    rp.write_grid_and_check(&up, ImageFormat::Png)
        .expect("write amplified gradient");
    rp.write_grid_and_check(&down, ImageFormat::Png)
        .expect("write reduced gradient");

    assert!(rp.cleanup(), "scale regression test failed");
}
