use std::process::Command;

fn run_with_args(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_contapal"))
        .args(args)
        .output()
        .expect("run binary")
}

#[test]
fn single_file_prints_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cuento.txt");
    std::fs::write(&path, "hola hola mundo").unwrap();

    let output = run_with_args(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Archivo procesado exitosamente"));
    assert!(stdout.contains("El número total de palabras es: 3"));
    assert!(stdout.contains("'hola' - 2 veces"));
}

#[test]
fn json_output_parses_with_expected_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cuento.txt");
    std::fs::write(&path, "hola hola mundo").unwrap();

    let output = run_with_args(&[path.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["total_words"], 3);
    assert_eq!(v["is_empty"], false);
    let top = v["top_words"].as_array().expect("top_words array");
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["word"], "hola");
    assert_eq!(top[0]["count"], 2);
}

#[test]
fn csv_output_has_header_rows_and_total() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cuento.txt");
    std::fs::write(&path, "hola hola mundo").unwrap();

    let output = run_with_args(&[path.to_str().unwrap(), "--csv"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "palabra,frecuencia");
    assert_eq!(lines[1], "hola,2");
    assert_eq!(lines[2], "mundo,1");
    assert_eq!(lines[3], "Total,3");
}

#[test]
fn non_txt_file_requires_yes_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notas.md");
    std::fs::write(&path, "uno dos tres").unwrap();

    let refused = run_with_args(&[path.to_str().unwrap()]);
    assert!(!refused.status.success());
    let stderr = String::from_utf8_lossy(&refused.stderr);
    assert!(stderr.contains("--yes"));

    let accepted = run_with_args(&[path.to_str().unwrap(), "--yes"]);
    assert!(accepted.status.success());
    let stdout = String::from_utf8_lossy(&accepted.stdout);
    assert!(stdout.contains("El número total de palabras es: 3"));
}

#[test]
fn missing_file_fails_with_diagnostic_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_existe.txt");

    let output = run_with_args(&[missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No se encontró"));
}

#[test]
fn directory_path_fails_validation() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_with_args(&[dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("es una carpeta, no un archivo"));
}
