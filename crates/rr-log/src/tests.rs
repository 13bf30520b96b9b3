//! Unit tests for rr-log.

use crate::RawLogRow;

// ── Helpers ───────────────────────────────────────────────────────────────────

const LOG_CSV: &str = "\
,positions,actions,cargo,studs_left\n\
0,\"[S,C]\",\"[PICK,CHRG]\",{A B},\"(2, 4)\"\n\
1,\"[T,C]\",\"[MOVE,CHRG]\",{A B},\"(2, 4)\"\n\
2,\"[B,T]\",\"[PLACE,MOVE]\",{- B},\"(1, 4)\"\n\
";

fn raw(positions: &str) -> RawLogRow {
    RawLogRow::new(positions, "[IDLE]", "{A}", "(2, 4)")
}

// ── Field parsers ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fields {
    use rr_core::{PositionCode, Zone};

    use crate::{
        ActionCode, LogError, LogRow, RawLogRow, StudsLeft, parse_actions, parse_cargo,
        parse_positions, parse_studs_left,
    };

    #[test]
    fn positions_bracket_list() {
        assert_eq!(
            parse_positions("[S,T,B]").unwrap(),
            vec![
                PositionCode::At(Zone::Storage),
                PositionCode::Transit,
                PositionCode::At(Zone::Build),
            ]
        );
    }

    #[test]
    fn positions_tolerate_spaces_and_quotes() {
        assert_eq!(
            parse_positions("['C', 'T']").unwrap(),
            vec![PositionCode::At(Zone::Charging), PositionCode::Transit]
        );
    }

    #[test]
    fn positions_empty_list() {
        assert!(parse_positions("[]").unwrap().is_empty());
    }

    #[test]
    fn positions_unknown_code() {
        assert!(matches!(parse_positions("[S,Q]"), Err(LogError::Position(_))));
    }

    #[test]
    fn actions_kept_verbatim() {
        assert_eq!(
            parse_actions("[MOVE,CHRG]"),
            vec![ActionCode("MOVE".into()), ActionCode("CHRG".into())]
        );
    }

    #[test]
    fn cargo_two_labels() {
        assert_eq!(parse_cargo("{A B}"), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn cargo_empty_set() {
        assert!(parse_cargo("{}").is_empty());
    }

    #[test]
    fn studs_tuple_and_list() {
        assert_eq!(parse_studs_left("(2, 4)").unwrap(), StudsLeft { horizontal: 2, vertical: 4 });
        assert_eq!(parse_studs_left("[0,0]").unwrap(), StudsLeft { horizontal: 0, vertical: 0 });
    }

    #[test]
    fn studs_non_numeric_fails() {
        assert!(matches!(
            parse_studs_left("(two, 4)"),
            Err(LogError::Field { field: "studs_left", .. })
        ));
    }

    #[test]
    fn studs_wrong_arity_fails() {
        assert!(parse_studs_left("(1, 2, 3)").is_err());
        assert!(parse_studs_left("()").is_err());
    }

    #[test]
    fn log_row_parse() {
        let row = LogRow::parse(&RawLogRow::new("[S,C]", "[PICK,CHRG]", "{A B}", "(1, 3)")).unwrap();
        assert_eq!(row.positions.len(), 2);
        assert_eq!(row.actions.len(), 2);
        assert_eq!(row.cargo, vec!["A", "B"]);
        assert_eq!(row.studs_left, StudsLeft { horizontal: 1, vertical: 3 });
    }
}

// ── LogTable ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;
    use crate::{LogError, LogTable};

    #[test]
    fn empty_rejected() {
        assert!(matches!(LogTable::new(vec![]), Err(LogError::Empty)));
    }

    #[test]
    fn neighbors_wrap_at_both_ends() {
        let t = LogTable::new(vec![raw("[S]"), raw("[T]"), raw("[B]")]).unwrap();
        let (p, c, n) = t.neighbors(0);
        assert_eq!((p.positions.as_str(), c.positions.as_str(), n.positions.as_str()), ("[B]", "[S]", "[T]"));
        let (p, c, n) = t.neighbors(2);
        assert_eq!((p.positions.as_str(), c.positions.as_str(), n.positions.as_str()), ("[T]", "[B]", "[S]"));
    }

    #[test]
    fn single_row_is_its_own_neighbor() {
        let t = LogTable::new(vec![raw("[C]")]).unwrap();
        let (p, c, n) = t.neighbors(0);
        assert_eq!(p, c);
        assert_eq!(c, n);
    }

    #[test]
    fn row_index_is_modular() {
        let t = LogTable::new(vec![raw("[S]"), raw("[B]")]).unwrap();
        assert_eq!(t.row(3).positions, "[B]");
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::LOG_CSV;
    use crate::{LogColumns, LogError, load_log_csv, load_log_reader};

    #[test]
    fn reads_all_rows() {
        let t = load_log_reader(Cursor::new(LOG_CSV), &LogColumns::default()).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.row(0).positions, "[S,C]");
        assert_eq!(t.row(1).actions, "[MOVE,CHRG]");
        assert_eq!(t.row(2).cargo, "{- B}");
        assert_eq!(t.row(2).studs_left, "(1, 4)");
    }

    #[test]
    fn header_only_is_empty() {
        let csv = ",positions,actions,cargo,studs_left\n";
        assert!(matches!(
            load_log_reader(Cursor::new(csv), &LogColumns::default()),
            Err(LogError::Empty)
        ));
    }

    #[test]
    fn short_row_reports_missing_column() {
        let csv = ",positions,actions,cargo,studs_left\n0,[S],[IDLE],{A}\n";
        assert!(matches!(
            load_log_reader(Cursor::new(csv), &LogColumns::default()),
            Err(LogError::MissingColumn { row: 0, column: 4 })
        ));
    }

    #[test]
    fn custom_columns() {
        let csv = "studs,cargo,actions,positions\n\"(0, 0)\",{X},[IDLE],[B]\n";
        let cols = LogColumns { positions: 3, actions: 2, cargo: 1, studs_left: 0 };
        let t = load_log_reader(Cursor::new(csv), &cols).unwrap();
        assert_eq!(t.row(0).positions, "[B]");
        assert_eq!(t.row(0).studs_left, "(0, 0)");
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("log.csv");
        std::fs::write(&path, LOG_CSV).unwrap();
        let t = load_log_csv(&path, &LogColumns::default()).unwrap();
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_log_csv(&dir.path().join("absent.csv"), &LogColumns::default()).unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
