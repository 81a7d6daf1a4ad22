use gcode_scan::{scan, GcodeError, GcodeResult, Line, Parser, ScanError};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "\
; generated by slicer
%
N1 G21 (units: mm)
N2 G90\r
N3 G28 X0 Y0 ; home
(layer 1) G1 Z0.3 F3000 (first move)
G1 X10 Y20 E1.5
#end
M84
";

fn codes(line: &Line) -> Vec<String> {
    line.codes().iter().map(ToString::to_string).collect()
}

#[test]
fn test_program_stops_at_percent() {
    let mut parser = Parser::new(PROGRAM.as_bytes());

    let first = parser.next_line().unwrap().unwrap();
    assert!(first.is_empty());
    assert_eq!(first.text(), "; generated by slicer");

    let err = parser.next_line().unwrap_err();
    match err {
        GcodeError::Scan {
            line_number,
            source: ScanError::UnexpectedChar { found, position, .. },
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(found, '%');
            assert_eq!(position, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_program_after_recovery() {
    let lines: Vec<GcodeResult<Line>> = Parser::new(PROGRAM.as_bytes()).collect();
    assert_eq!(lines.len(), 9);

    let scanned: Vec<&Line> = lines.iter().filter_map(|l| l.as_ref().ok()).collect();
    assert_eq!(scanned.len(), 8);

    assert_eq!(codes(scanned[1]), vec!["G21"]);
    assert_eq!(scanned[1].comment(), Some("(units: mm)"));

    assert_eq!(codes(scanned[2]), vec!["G90"]);
    assert_eq!(scanned[2].text(), "N2 G90");

    assert_eq!(codes(scanned[3]), vec!["G28", "X0", "Y0"]);

    assert_eq!(codes(scanned[4]), vec!["G1", "Z0.3", "F3000"]);
    assert_eq!(scanned[4].comment(), Some("(first move)"));

    assert_eq!(codes(scanned[5]), vec!["G1", "X10", "Y20", "E1.5"]);
    assert!(scanned[6].is_empty());
    assert_eq!(codes(scanned[7]), vec!["M84"]);
}

#[test]
fn test_scan_is_stateless() {
    let first = scan("(a) G1 X1");
    let _ = scan("N5 @");
    let second = scan("(a) G1 X1");
    assert_eq!(first, second);
}

#[test]
fn test_scan_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("G1 X{i} (t{i})");
                let line = scan(&text).unwrap();
                (codes(&line), line.comment().map(str::to_string))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (codes, comment) = handle.join().unwrap();
        assert_eq!(codes, vec!["G1".to_string(), format!("X{i}")]);
        assert_eq!(comment, Some(format!("(t{i})")));
    }
}
