// tests/batch_e2e.rs
use std::fs;
use std::path::PathBuf;

use frame_tagger::config::options::{AppOptions, ExportFormat};
use frame_tagger::error::RunError;
use frame_tagger::extract::{AttributeKind, AttributeSet};
use frame_tagger::file;
use frame_tagger::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("frame_tagger_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn opts_for(input: &PathBuf, out: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.extract.input = Some(input.clone());
    opts.export.set_path(out);
    opts
}

#[test]
fn csv_round_trip_adds_and_overwrites_columns() {
    let dir = tmp_dir("csv");
    let input = dir.join("stock list.csv");
    fs::write(
        &input,
        "Item,Details,COLOR\r\n\
         1,\"RB3025 C-001 58-14-135 METAL AVIATOR FULL G\",old\r\n\
         2,,old\r\n\
         3,\"TITAN, ROUND 49-18-140 L.\",old\r\n",
    )
    .unwrap();

    let out = dir.join("result.csv");
    let opts = opts_for(&input, out.to_str().unwrap());
    let summary = runner::run(&opts, None).unwrap();

    assert_eq!(summary.output, out);
    assert_eq!(summary.stats.rows, 3);

    let ds = file::read_table(&out).unwrap();
    assert_eq!(
        ds.headers.as_ref().unwrap(),
        &vec!["Item", "Details", "COLOR", "GENDER", "MATERIAL", "SHAPE", "STYLE", "SIZE"]
    );
    assert_eq!(ds.rows[0], vec![
        "1", "RB3025 C-001 58-14-135 METAL AVIATOR FULL G", "001",
        "Gents", "METAL", "Aviator", "Full Rim", "58",
    ]);
    // Empty description → every computed cell empty, existing COLOR replaced.
    assert_eq!(ds.rows[1], vec!["2", "", "", "", "", "", "", ""]);
    assert_eq!(ds.rows[2][3..8], ["Ladies", "TITANIUM", "Round", "", "49"]);
}

#[test]
fn tsv_input_defaults_to_tsv_output_with_processed_name() {
    let dir = tmp_dir("tsv");
    let input = dir.join("My Stock (v2).tsv");
    fs::write(&input, "details\tqty\nAB12 C15 52-20-145 U\t3\n").unwrap();

    // Trailing slash: directory hint, default file name is appended.
    let hint = format!("{}/", dir.join("out").display());
    let mut opts = opts_for(&input, &hint);
    opts.extract.attributes = [AttributeKind::Gender, AttributeKind::Color].into_iter().collect();

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.output, dir.join("out").join("processed_My_Stock_v2.tsv"));

    let text = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(text, "details\tqty\tGENDER\tCOLOR\nAB12 C15 52-20-145 U\t3\tUnisex\t15\n");
}

#[test]
fn format_override_and_no_headers() {
    let dir = tmp_dir("override");
    let input = dir.join("in.csv");
    fs::write(&input, "Details\nAB12 C-7 50-20-140 G\n").unwrap();

    let mut opts = opts_for(&input, &format!("{}/", dir.display()));
    opts.extract.attributes = [AttributeKind::FrameSize].into_iter().collect();
    opts.export.format = Some(ExportFormat::Tsv);
    opts.export.include_headers = false;

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.output, dir.join("processed_in.tsv"));
    assert_eq!(fs::read_to_string(&summary.output).unwrap(), "AB12 C-7 50-20-140 G\t50\n");
}

#[test]
fn missing_column_names_available_headers() {
    let dir = tmp_dir("missing");
    let input = dir.join("in.csv");
    fs::write(&input, "Item,Description\n1,AB12 C-7\n").unwrap();

    let opts = opts_for(&input, dir.join("out.csv").to_str().unwrap());
    match runner::run(&opts, None) {
        Err(RunError::MissingColumn { column, available }) => {
            assert_eq!(column, "Details");
            assert_eq!(available, vec!["Item", "Description"]);
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    assert!(!dir.join("out.csv").exists());
}

#[test]
fn collaborator_errors() {
    let dir = tmp_dir("errors");

    let mut opts = AppOptions::default();
    assert!(matches!(runner::run(&opts, None), Err(RunError::NoInput)));

    let input = dir.join("empty.csv");
    fs::write(&input, "").unwrap();
    opts.extract.input = Some(input.clone());
    opts.extract.attributes = AttributeSet::empty();
    assert!(matches!(runner::run(&opts, None), Err(RunError::NothingRequested)));

    opts.extract.attributes = AttributeSet::all();
    assert!(matches!(runner::run(&opts, None), Err(RunError::EmptyInput(_))));

    opts.extract.input = Some(dir.join("does_not_exist.csv"));
    assert!(matches!(runner::run(&opts, None), Err(RunError::Io { .. })));
}

#[test]
fn large_batch_keeps_row_order() {
    let dir = tmp_dir("order");
    let input = dir.join("big.csv");
    let mut text = String::from("Details\n");
    for i in 0..5000u32 {
        let size = 40 + i % 31;
        text.push_str(&format!("AB{i} C-{i} {size}-18-140 L\n"));
    }
    fs::write(&input, text).unwrap();

    let out = dir.join("big_out.csv");
    let mut opts = opts_for(&input, out.to_str().unwrap());
    opts.extract.attributes = [AttributeKind::FrameSize, AttributeKind::Color].into_iter().collect();
    runner::run(&opts, None).unwrap();

    let ds = file::read_table(&out).unwrap();
    assert_eq!(ds.row_count(), 5000);
    for (i, row) in ds.rows.iter().enumerate() {
        let size = 40 + i as u32 % 31;
        assert_eq!(row[1], size.to_string(), "size at row {i}");
        assert_eq!(row[2], i.to_string(), "color at row {i}");
    }
}

#[test]
fn blank_row_in_single_column_file_is_kept() {
    let dir = tmp_dir("blank_row");
    let input = dir.join("one_col.csv");
    fs::write(&input, "Details\nAB CD X L\n\nAB CD X G\n").unwrap();

    let out = dir.join("one_col_out.csv");
    let mut opts = opts_for(&input, out.to_str().unwrap());
    opts.extract.attributes = [AttributeKind::Gender].into_iter().collect();
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.stats.rows, 3);

    let ds = file::read_table(&out).unwrap();
    assert_eq!(ds.rows, vec![
        vec!["AB CD X L", "Ladies"],
        vec!["", ""],
        vec!["AB CD X G", "Gents"],
    ]);
}

#[test]
fn excel_output_then_excel_input() {
    let dir = tmp_dir("excel");
    let input = dir.join("stock.csv");
    fs::write(&input, "Item,Details\n1,RB3025 C-001 58-14-135 METAL AVIATOR FULL G\n2,\n").unwrap();

    // CSV in → workbook out
    let mut opts = opts_for(&input, &format!("{}/", dir.display()));
    opts.extract.attributes = [AttributeKind::Gender, AttributeKind::FrameSize].into_iter().collect();
    opts.export.format = Some(ExportFormat::Xlsx);
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.output, dir.join("processed_stock.xlsx"));

    let ds = file::read_table(&summary.output).unwrap();
    assert_eq!(ds.headers.as_ref().unwrap(), &vec!["Item", "Details", "GENDER", "SIZE"]);
    assert_eq!(ds.rows[0], vec!["1", "RB3025 C-001 58-14-135 METAL AVIATOR FULL G", "Gents", "58"]);
    assert_eq!(ds.rows[1][0], "2");
    assert!(ds.rows[1][1..].iter().all(|c| c.is_empty()));

    // Workbook in → workbook out by default, next to nothing else
    let xlsx_in = summary.output.clone();
    let out_dir = dir.join("second");
    let mut opts = opts_for(&xlsx_in, &format!("{}/", out_dir.display()));
    opts.extract.attributes = [AttributeKind::Color].into_iter().collect();
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.output, out_dir.join("processed_processed_stock.xlsx"));

    let ds = file::read_table(&summary.output).unwrap();
    assert_eq!(ds.headers.as_ref().unwrap().last().map(String::as_str), Some("COLOR"));
    assert_eq!(ds.rows[0].last().map(String::as_str), Some("001"));
}

#[test]
fn unreadable_workbook_is_reported() {
    let dir = tmp_dir("bad_xlsx");
    let input = dir.join("broken.xlsx");
    fs::write(&input, "not a zip archive").unwrap();

    let opts = opts_for(&input, dir.join("out.xlsx").to_str().unwrap());
    assert!(matches!(runner::run(&opts, None), Err(RunError::Workbook { .. })));
}
