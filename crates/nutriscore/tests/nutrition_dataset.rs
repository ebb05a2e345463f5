use std::io::Cursor;

use nutriscore::dataset::{
    count_columns_above_missing_threshold, fill_dataset, write_records, DatasetColumn,
    ProductTableImporter, QualityReport, DEFAULT_MISSING_THRESHOLD_PCT,
};
use nutriscore::scoring::{compute_score_and_grade, NutriGrade};

const SAMPLE_CSV: &str = "\
product_name,energy_100g,saturated_fat_100g,sugars_100g,fiber_100g,proteins_100g,sodium_100g,nutrition_score_fr_100g,nutrition_grade_fr
Breakfast muesli,500,2,5,3,5,100,,
Orange soda,1800,0,40,0,0,30,14,d
Dark chocolate,2200,18,29,7,6,20,,
Lentil soup,280,0.3,1.2,3.1,4.5,350,1,
Salted crisps,2100,3.5,1.5,4.2,6,650,,
";

#[test]
fn import_fill_and_audit_round_trip() {
    let mut records =
        ProductTableImporter::from_reader(Cursor::new(SAMPLE_CSV)).expect("sample parses");
    assert_eq!(records.len(), 5);

    let before = QualityReport::compute(&records, DEFAULT_MISSING_THRESHOLD_PCT)
        .expect("report builds");
    let rates = before.formatted_rates();
    assert_eq!(rates["product_name"], "0.00 %");
    assert_eq!(rates["nutrition_score_fr_100g"], "60.00 %");
    assert_eq!(rates["nutrition_grade_fr"], "80.00 %");
    assert_eq!(before.flagged_columns, 2);

    let summary = fill_dataset(&mut records).expect("fill succeeds");
    assert_eq!(summary.records, 5);
    assert_eq!(summary.scores_filled, 3);
    assert_eq!(summary.grades_filled, 4);
    assert_eq!(summary.untouched, 1);

    let after = QualityReport::compute(&records, DEFAULT_MISSING_THRESHOLD_PCT)
        .expect("report builds");
    for entry in &after.entries {
        assert_eq!(entry.formatted, "0.00 %", "{} still missing", entry.header);
    }
    assert_eq!(after.flagged_columns, 0);
}

#[test]
fn filled_values_match_the_engine_and_presets_survive() {
    let mut records =
        ProductTableImporter::from_reader(Cursor::new(SAMPLE_CSV)).expect("sample parses");
    fill_dataset(&mut records).expect("fill succeeds");

    let muesli = &records[0];
    let (score, grade) = compute_score_and_grade(500.0, 2.0, 5.0, 3.0, 5.0, 100.0);
    assert_eq!(muesli.nutrition_score_fr_100g, Some(score));
    assert_eq!(muesli.nutrition_grade_fr, Some(grade));
    assert_eq!(score, -3);
    assert_eq!(grade, NutriGrade::A);

    // the soda row arrived fully graded and must come through verbatim
    let soda = &records[1];
    assert_eq!(soda.nutrition_score_fr_100g, Some(14));
    assert_eq!(soda.nutrition_grade_fr, Some(NutriGrade::D));

    // the soup kept its score and only gained the grade
    let soup = &records[3];
    assert_eq!(soup.nutrition_score_fr_100g, Some(1));
    assert!(soup.nutrition_grade_fr.is_some());
}

#[test]
fn strict_threshold_comparison_spans_the_whole_table() {
    let records =
        ProductTableImporter::from_reader(Cursor::new(SAMPLE_CSV)).expect("sample parses");

    // grade column at 80%, score column at 60%, everything else fully present
    assert_eq!(
        count_columns_above_missing_threshold(&records, 60.0).expect("counts"),
        1
    );
    assert_eq!(
        count_columns_above_missing_threshold(&records, 59.9).expect("counts"),
        2
    );
    assert_eq!(
        count_columns_above_missing_threshold(&records, 80.0).expect("counts"),
        0
    );
}

#[test]
fn repaired_tables_serialize_with_the_canonical_header() {
    let mut records =
        ProductTableImporter::from_reader(Cursor::new(SAMPLE_CSV)).expect("sample parses");
    fill_dataset(&mut records).expect("fill succeeds");

    let mut buffer = Vec::new();
    write_records(&records, &mut buffer).expect("write succeeds");
    let text = String::from_utf8(buffer).expect("utf-8 output");

    let header = text.lines().next().expect("header row");
    let expected = DatasetColumn::ordered().map(DatasetColumn::header).join(",");
    assert_eq!(header, expected);

    let reparsed =
        ProductTableImporter::from_reader(Cursor::new(text)).expect("reparse succeeds");
    assert_eq!(reparsed, records);
}
