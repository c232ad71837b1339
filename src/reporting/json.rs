use crate::error::Result;
use crate::types::Report;

pub(super) fn render(report: &Report) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    #[test]
    fn field_names() -> anyhow::Result<()> {
        let mut r = Record::new("a.cs");
        r.push_stored_procedure(2, "usp_A".into());
        let out = render(&Report::from(vec![r]))?;
        let v: serde_json::Value = serde_json::from_str(&out)?;
        let rec = &v["records"][0];
        assert_eq!(rec["stored_procedure_count"], 1);
        assert_eq!(rec["stored_procedures"][0]["line"], 2);
        assert_eq!(rec["stored_procedures"][0]["name"], "usp_A");
        assert_eq!(rec["table_count"], 0);
        Ok(())
    }
}
