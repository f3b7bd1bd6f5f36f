use std::io::Read;

use serde::Deserialize;

use crate::workflows::assessment::domain::{UserSkill, MAX_SKILL_LEVEL};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read skills csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: skill name must not be empty")]
    EmptyName { row: usize },
    #[error("row {row}: level {level} for '{name}' is above {max}")]
    LevelOutOfRange {
        row: usize,
        name: String,
        level: u8,
        max: u8,
    },
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    #[serde(alias = "Name", alias = "skill", alias = "Skill")]
    name: String,
    #[serde(alias = "Level")]
    level: u8,
}

/// Parses a `name,level` CSV snapshot. Any bad row fails the whole import.
pub fn parse_skills_csv<R: Read>(reader: R) -> Result<Vec<UserSkill>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut skills = Vec::new();

    for (index, record) in csv_reader.deserialize::<SkillRow>().enumerate() {
        let row = index + 1;
        let SkillRow { name, level } = record?;
        if name.is_empty() {
            return Err(ImportError::EmptyName { row });
        }
        if level > MAX_SKILL_LEVEL {
            return Err(ImportError::LevelOutOfRange {
                row,
                name,
                level,
                max: MAX_SKILL_LEVEL,
            });
        }
        skills.push(UserSkill::new(name, level));
    }

    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_trimmed_rows() {
        let csv = "name,level\n SQL , 3\nPython,2\n";
        let skills = parse_skills_csv(Cursor::new(csv)).expect("csv parses");
        assert_eq!(
            skills,
            vec![UserSkill::new("SQL", 3), UserSkill::new("Python", 2)]
        );
    }

    #[test]
    fn accepts_capitalized_headers() {
        let csv = "Skill,Level\nStatistics,4\n";
        let skills = parse_skills_csv(Cursor::new(csv)).expect("csv parses");
        assert_eq!(skills, vec![UserSkill::new("Statistics", 4)]);
    }

    #[test]
    fn rejects_levels_above_the_scale() {
        let csv = "name,level\nSQL,3\nPython,9\n";
        let err = parse_skills_csv(Cursor::new(csv)).expect_err("level 9 rejected");
        match err {
            ImportError::LevelOutOfRange { row, level, .. } => {
                assert_eq!(row, 2);
                assert_eq!(level, 9);
            }
            other => panic!("expected level error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_levels() {
        let csv = "name,level\nSQL,expert\n";
        assert!(matches!(
            parse_skills_csv(Cursor::new(csv)),
            Err(ImportError::Csv(_))
        ));
    }

    #[test]
    fn rejects_blank_names() {
        let csv = "name,level\n ,2\n";
        assert!(matches!(
            parse_skills_csv(Cursor::new(csv)),
            Err(ImportError::EmptyName { row: 1 })
        ));
    }
}
