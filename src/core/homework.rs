use serde_json::Value;

use crate::errors::BotError;
use crate::models::{HomeworkRecord, VerdictTable};

/// Checks the shape of a raw API answer and returns its `homeworks` list.
///
/// Checks run in a fixed order and stop at the first violation: root is an
/// object, `current_date` present, `homeworks` present, `homeworks` is an
/// array, `current_date` is an integer.
pub fn check_response(response: &Value) -> Result<&[HomeworkRecord], BotError> {
    let root = response.as_object().ok_or(BotError::UnexpectedType {
        what: "API response",
        expected: "object",
    })?;

    let current_date = root
        .get("current_date")
        .ok_or(BotError::MissingKey("current_date"))?;
    let homeworks = root
        .get("homeworks")
        .ok_or(BotError::MissingKey("homeworks"))?;

    let homeworks = homeworks.as_array().ok_or(BotError::UnexpectedType {
        what: "homeworks",
        expected: "array",
    })?;

    if current_date.as_i64().is_none() {
        return Err(BotError::UnexpectedType {
            what: "current_date",
            expected: "integer",
        });
    }

    Ok(homeworks)
}

/// `current_date` of a response that already passed `check_response`.
pub fn current_date(response: &Value) -> Result<i64, BotError> {
    response
        .get("current_date")
        .and_then(Value::as_i64)
        .ok_or(BotError::UnexpectedType {
            what: "current_date",
            expected: "integer",
        })
}

/// Builds the notification text for one homework record.
pub fn parse_status(homework: &HomeworkRecord, verdicts: &VerdictTable) -> Result<String, BotError> {
    let homework_name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(BotError::MissingField("homework_name"))?;

    let status = homework.get("status").unwrap_or(&Value::Null);
    let verdict = status
        .as_str()
        .and_then(|code| verdicts.verdict(code))
        .ok_or_else(|| BotError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name, verdict
    ))
}
