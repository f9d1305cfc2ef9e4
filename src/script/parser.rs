//! Line parser for control scripts.

use crate::error::{Result, TunerError};
use crate::gearbox::GearId;

use super::Command;

/// Parse one script line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>> {
    let code = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut words = code.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(TunerError::script(line_no, format!("unexpected argument {:?}", extra)));
    }

    let cmd = match keyword.to_lowercase().as_str() {
        "throttle" => Command::Throttle(number(line_no, keyword, arg)?),
        "timing" => Command::Timing(number(line_no, keyword, arg)?),
        "boost" => Command::Boost(number(line_no, keyword, arg)?),
        "afr" => Command::Afr(number(line_no, keyword, arg)?),
        "gear" => {
            let name = required(line_no, keyword, arg)?;
            let gear = GearId::parse(name)
                .ok_or_else(|| TunerError::script(line_no, format!("unknown gear {:?}", name)))?;
            Command::Gear(gear)
        }
        "on" => no_arg(line_no, keyword, arg, Command::EngineOn)?,
        "off" => no_arg(line_no, keyword, arg, Command::EngineOff)?,
        "up" => no_arg(line_no, keyword, arg, Command::Upshift)?,
        "down" => no_arg(line_no, keyword, arg, Command::Downshift)?,
        "engine" => Command::Engine(arg.map(str::to_string)),
        "step" => match arg {
            None => Command::Step(1),
            Some(text) => Command::Step(text.parse::<usize>().map_err(|_| {
                TunerError::script(line_no, format!("invalid tick count {:?}", text))
            })?),
        },
        other => {
            return Err(TunerError::script(line_no, format!("unknown command {:?}", other)));
        }
    };

    Ok(Some(cmd))
}

fn required<'a>(line_no: usize, keyword: &str, arg: Option<&'a str>) -> Result<&'a str> {
    arg.ok_or_else(|| TunerError::script(line_no, format!("'{}' needs a value", keyword)))
}

fn number(line_no: usize, keyword: &str, arg: Option<&str>) -> Result<f64> {
    let text = required(line_no, keyword, arg)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TunerError::script(line_no, format!("invalid number {:?}", text))),
    }
}

fn no_arg(line_no: usize, keyword: &str, arg: Option<&str>, cmd: Command) -> Result<Command> {
    match arg {
        None => Ok(cmd),
        Some(extra) => Err(TunerError::script(
            line_no,
            format!("'{}' takes no value, got {:?}", keyword, extra),
        )),
    }
}
