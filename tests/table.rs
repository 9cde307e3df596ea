use itertools::Itertools;
use qint::qint::Qint;
use qint::table::{default_rows, write_table, TableRow};

fn render_default_table() -> String {
    let mut buffer = vec![];
    write_table(&mut buffer, &default_rows()).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn seventeen_lines_starting_at_0x30() {
    let output = render_default_table();
    let lines = output.lines().collect_vec();

    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], ";; 0x30 00110 000 -> 0.00100 TON");
    assert_eq!(lines[16], ";; 0x40 01000 000 -> 0.10000 TON");
}

#[test]
fn every_line_has_the_table_format() {
    for line in render_default_table().lines() {
        let fields = line.split(' ').collect_vec();
        assert_eq!(fields.len(), 7, "{}", line);
        assert_eq!(fields[0], ";;");
        assert!(fields[1].starts_with("0x"));
        assert_eq!(fields[2].len(), 5);
        assert_eq!(fields[3].len(), 3);
        assert_eq!(fields[4], "->");
        assert_eq!(fields[5].split('.').nth(1).map(str::len), Some(5));
        assert_eq!(fields[6], "TON");
    }
}

#[test]
fn known_rows() {
    let expected = [
        (0x31, ";; 0x31 00110 001 -> 0.00125 TON"),
        (0x34, ";; 0x34 00110 100 -> 0.00500 TON"),
        (0x37, ";; 0x37 00110 111 -> 0.00875 TON"),
        (0x38, ";; 0x38 00111 000 -> 0.01000 TON"),
        (0x3A, ";; 0x3A 00111 010 -> 0.02500 TON"),
        (0x3F, ";; 0x3F 00111 111 -> 0.08750 TON"),
    ];
    for (bits, line) in expected {
        assert_eq!(TableRow::new(Qint::new(bits)).to_string(), line);
    }
}
