use std::fs;
use std::path::PathBuf;

use progmap_ingest::{CatalogFormat, detect_columns, load_catalog, read_csv_table};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("progmap_ingest_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

#[test]
fn reads_csv_and_detects_roles() {
    let contents = "\
ID Contacto,Email,Telefono,Programa de Interes
C-1,ana@example.org,555-0100,Law
C-2,luis@example.org,555-0101,Medicine
";
    let path = temp_file("contacts.csv", contents);
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(
        table.headers,
        vec!["ID Contacto", "Email", "Telefono", "Programa de Interes"]
    );
    assert_eq!(table.row_count(), 2);

    let columns = detect_columns(&table.headers);
    assert_eq!(columns.program.as_deref(), Some("Programa de Interes"));
    assert_eq!(columns.contact_id.as_deref(), Some("ID Contacto"));
    assert_eq!(columns.email.as_deref(), Some("Email"));
    assert_eq!(columns.phone.as_deref(), Some("Telefono"));

    cleanup(&path);
}

#[test]
fn skips_banner_row_and_pads_short_rows() {
    let contents = "\
Export generated 2026-08-01,,
Programa,Email,Telefono
Law,a@x.org,555
Medicine,b@x.org
";
    let path = temp_file("banner.csv", contents);
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Programa", "Email", "Telefono"]);
    assert_eq!(table.rows[1], vec!["Medicine", "b@x.org", ""]);

    cleanup(&path);
}

#[test]
fn empty_file_yields_empty_table() {
    let path = temp_file("empty.csv", "");
    let table = read_csv_table(&path).expect("read csv");
    assert!(table.is_empty());
    assert!(table.headers.is_empty());

    cleanup(&path);
}

#[test]
fn loads_dax_reference_list() {
    let contents = r#"
Programs = DATATABLE(
    "Name", STRING, "Level", STRING,
    {
        {"Business Administration", "UG"},
        {"Nursing", "UG"}
    }
)
"#;
    let path = temp_file("programs.dax", contents);
    let (catalog, format) = load_catalog(&path).expect("load catalog");
    assert_eq!(format, CatalogFormat::DaxDatatable);
    assert_eq!(catalog.programs(), ["Business Administration", "Nursing"]);

    cleanup(&path);
}

#[test]
fn loads_line_reference_list() {
    let path = temp_file("programs.txt", "Law\n\n  Medicine  \n");
    let (catalog, format) = load_catalog(&path).expect("load catalog");
    assert_eq!(format, CatalogFormat::Lines);
    assert_eq!(catalog.programs(), ["Law", "Medicine"]);

    cleanup(&path);
}

#[test]
fn missing_file_reports_path() {
    let error = load_catalog(&PathBuf::from("/nonexistent/programs.txt"))
        .expect_err("missing file should fail");
    assert!(error.to_string().contains("/nonexistent/programs.txt"));
}
