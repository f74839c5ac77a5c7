#![no_main]

use libfuzzer_sys::fuzz_target;
use lipid_curve_editor::io::parse_snapshot;
use lipid_curve_editor::{ArcTemplate, CurveShape};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    // Jeder akzeptierte Snapshot muss sich ohne Panic in eine Kurve überführen lassen
    if let Ok(snapshot) = parse_snapshot(json) {
        let shape = CurveShape::from_snapshot(snapshot, &ArcTemplate::default(), 1.0, 16);
        let _ = shape.build_path(1.0).to_svg_d();
    }
});
