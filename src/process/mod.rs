// src/process/mod.rs
pub mod merge;
pub mod names;
pub mod phone;

use anyhow::Result;
use tracing::info;

use crate::table::Table;

/// Run the three transform stages in order: reassemble name fields,
/// collapse duplicate contacts, canonicalize phone numbers.
pub fn normalize_phonebook(mut table: Table) -> Result<Table> {
    names::normalize_names(&mut table)?;
    let before = table.rows.len();
    let mut table = merge::merge_duplicates(table);
    info!(before, after = table.rows.len(), "merged duplicate contacts");
    phone::format_phones(&mut table)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,phonebook::process=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn full_pipeline_over_raw_phonebook() -> Result<()> {
        init_test_logging();
        let content = r#"Имя,Фамилия,Отчество,Должность,Email,Телефон
Валентин Усов Леонидович,,,старший инженер,usov@mail.ru,
Валентин,Усов,,,,"8 495 913-04-26 доб.1269"
Мария Зайцева,,,бухгалтер,zaytseva@mail.ru,не указан
Пётр,,Иванов,,petr@mail.ru,+7 916 123 45 67
"#;

        let raw = Table::parse_csv(content)?;
        let table = normalize_phonebook(raw)?;

        // one row per distinct (first, last) key, sorted by key
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.headers,
            vec!["Имя", "Фамилия", "Отчество", "Должность", "Email", "Телефон"]
        );

        let usov = table
            .rows
            .iter()
            .find(|r| r[0] == "Валентин" && r[1] == "Усов")
            .expect("merged Усов row");
        assert_eq!(
            usov,
            &vec![
                "Валентин".to_string(),
                "Усов".to_string(),
                "Леонидович".to_string(),
                "старший инженер".to_string(),
                "usov@mail.ru".to_string(),
                "+7(495)913-04-26 доб.1269".to_string(),
            ]
        );

        let zaytseva = table
            .rows
            .iter()
            .find(|r| r[1] == "Зайцева")
            .expect("Зайцева row");
        assert_eq!(zaytseva[5], "не указан");

        let ivanov = table.rows.iter().find(|r| r[1] == "Иванов").expect("Иванов row");
        assert_eq!(ivanov[0], "Пётр");
        assert_eq!(ivanov[2], "");
        assert_eq!(ivanov[5], "+7(916)123-45-67");
        Ok(())
    }

    #[test]
    fn pipeline_is_stable_on_already_clean_input() -> Result<()> {
        init_test_logging();
        let content = "Имя,Фамилия,Отчество,Должность,Email,Телефон\n\
                       Анна,Иванова,,,anna@mail.ru,+7(916)000-11-22\n";
        let raw = Table::parse_csv(content)?;

        let once = normalize_phonebook(raw)?;
        let twice = normalize_phonebook(once.clone())?;
        assert_eq!(twice, once);
        Ok(())
    }
}
