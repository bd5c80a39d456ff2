//! Walk through both measuring paths on a small plot.
//!
//! Usage:
//!   cargo run -p plotarea --example plot_walkthrough -- feet
//!
//! Prints the hand-entered triangles, then the traced boundary split into
//! triangles, each with its area in the chosen unit and in m².

use plotarea::prelude::*;

fn main() {
    let unit: Unit = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(Unit::Meters);

    let specs = vec![
        TriangleSpec::from_pairs(1, Method::Sss, [("a", "30"), ("b", "40"), ("c", "50")]),
        TriangleSpec::from_pairs(2, Method::Sas, [("sideA", "25"), ("sideB", "18"), ("angleC", "70")]),
        TriangleSpec::from_pairs(3, Method::Asa, [("angleA", "40"), ("angleB", "65"), ("sideC", "22")]),
        TriangleSpec::from_pairs(4, Method::BaseHeight, [("base", "15"), ("height", "")]),
    ];
    let specs = match specs.into_iter().collect::<Result<Vec<_>, _>>() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("bad sample spec: {e}");
            return;
        }
    };
    let (results, summary) = summarize(&specs, unit);
    println!("entered triangles ({unit}):");
    for r in &results {
        println!(
            "  #{:<2} {:<11} valid={:<5} area={:>10.3} {} ({:.3} m²)",
            r.id,
            r.method.name(),
            r.is_valid,
            r.area,
            unit.area_symbol(),
            r.area_in_meters
        );
    }
    println!(
        "  total {:.3} {} = {:.4} acres",
        summary.total_area,
        unit.area_symbol(),
        summary.total_acres
    );

    // Traced boundary in pixels; 120 px span = 36 units.
    let boundary: Vec<Point> = [
        (40.0, 40.0),
        (400.0, 60.0),
        (380.0, 300.0),
        (220.0, 220.0),
        (60.0, 320.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();
    let scale = ScaleReference::new(120.0, 36.0, unit);
    match measure_boundary(&boundary, &scale, 100) {
        Ok(m) => {
            println!(
                "traced boundary: {} triangles (complete={})",
                m.triangles.len(),
                m.complete
            );
            for r in &m.results {
                println!("  #{} area={:.3} {}", r.id, r.area, unit.area_symbol());
            }
            println!("  total {:.3} {}", m.summary.total_area, unit.area_symbol());
        }
        Err(e) => eprintln!("scale rejected: {e}"),
    }
}
