// tests/unit_extract.rs
use spscan_core::error::{ExtractKind, SpscanError};
use spscan_core::extract::{extract_sp_name, extract_table_names};

#[test]
fn test_sp_name_from_call() {
    assert_eq!(
        extract_sp_name(r#"ExecuteNonQuery(conn, "usp_GetUser")"#).unwrap(),
        "usp_GetUser"
    );
}

#[test]
fn test_sp_name_first_literal_only() {
    assert_eq!(extract_sp_name(r#"ExecuteReader(conn, "A", "B")"#).unwrap(), "A");
}

#[test]
fn test_sp_name_missing_literal() {
    let err = extract_sp_name("ExecuteNonQuery(cmd);").unwrap_err();
    assert!(matches!(
        err,
        SpscanError::ExtractionNotFound {
            kind: ExtractKind::StoredProcedure
        }
    ));
}

#[test]
fn test_table_names_keep_order_and_duplicates() {
    let names = extract_table_names(
        "SELECT * FROM tblUsers JOIN tblOrders ON tblUsers.id = tblOrders.uid",
    )
    .unwrap();
    assert_eq!(names, vec!["tblUsers", "tblOrders", "tblUsers", "tblOrders"]);
}

#[test]
fn test_table_names_missing() {
    let err = extract_table_names(r#"FillDropDownOnly(ddl, "select * from Users")"#).unwrap_err();
    assert!(matches!(
        err,
        SpscanError::ExtractionNotFound {
            kind: ExtractKind::Table
        }
    ));
}

#[test]
fn test_table_names_ignore_where_the_method_sits() {
    let names =
        extract_table_names(r#"var q = "from tblA"; FillDropDownOnly(ddl, q + " join tbl_B");"#)
            .unwrap();
    assert_eq!(names, vec!["tblA", "tbl_B"]);
}

#[test]
fn test_table_names_use_ascii_word_rules() {
    assert_eq!(
        extract_table_names(r#"FillDropDownOnly(ddl, "select * from étblX")"#).unwrap(),
        vec!["tblX"]
    );
    assert_eq!(
        extract_table_names(r#"FillDropDownOnly(ddl, "select * from tblKunde_Über")"#).unwrap(),
        vec!["tblKunde_"]
    );
    assert!(matches!(
        extract_table_names(r#"FillDropDownOnly(ddl, "select * from tblÜsers")"#),
        Err(SpscanError::ExtractionNotFound {
            kind: ExtractKind::Table
        })
    ));
}
