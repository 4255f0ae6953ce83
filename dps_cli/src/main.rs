//! dps_cli - command-line front end for dps_core
//!
//! Runs one calculation against the bundled (or an on-disk) data set
//! and prints the result record:
//!
//! ```text
//! dps_cli [--data <dir>] [--log <dir>] <weapon> <monster> <part> <combo> [skill:level[:rate] ...]
//! ```

use dps_core::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const USAGE: &str = "usage: dps_cli [--data <dir>] [--log <dir>] <weapon> <monster> <part> <combo> [skill:level[:rate] ...]";

struct Args {
    data_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    request: CalcRequest,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut data_dir = None;
    let mut log_dir = None;
    let mut positional = Vec::new();
    let mut skills = SkillSelection::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data" => {
                let dir = iter.next().ok_or("--data requires a directory")?;
                data_dir = Some(PathBuf::from(dir));
            }
            "--log" => {
                let dir = iter.next().ok_or("--log requires a directory")?;
                log_dir = Some(PathBuf::from(dir));
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if positional.len() < 4 => positional.push(arg.clone()),
            _ => {
                let (name, skill) = parse_skill_spec(arg)?;
                skills.insert(name, skill);
            }
        }
    }

    if positional.len() != 4 {
        return Err(USAGE.to_string());
    }

    Ok(Args {
        data_dir,
        log_dir,
        request: CalcRequest {
            weapon: positional[0].clone(),
            monster: positional[1].clone(),
            part: positional[2].clone(),
            combo: positional[3].clone(),
            skills,
        },
    })
}

/// Parse `name:level` or `name:level:rate`, rate in percent.
fn parse_skill_spec(spec: &str) -> Result<(String, ActiveSkill), String> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 || parts[0].is_empty() {
        return Err(format!("invalid skill spec '{spec}', expected name:level[:rate]"));
    }
    let level: u8 = parts[1]
        .parse()
        .map_err(|_| format!("invalid skill level in '{spec}'"))?;
    let rate = match parts.get(2) {
        Some(raw) => {
            let percent: f64 = raw
                .parse()
                .map_err(|_| format!("invalid skill rate in '{spec}'"))?;
            if !(0.0..=100.0).contains(&percent) {
                return Err(format!("skill rate in '{spec}' must be 0-100"));
            }
            percent / 100.0
        }
        None => 1.0,
    };
    Ok((parts[0].to_string(), ActiveSkill::new(level, rate)))
}

fn print_result(result: &CalcResult) {
    println!("weapon:            {}", result.weapon);
    println!("monster:           {} ({})", result.monster, result.part);
    println!("combo:             {}", result.combo);
    println!("sharpness:         {}", result.sharpness);
    if result.skills.is_empty() {
        println!("skills:            (none)");
    } else {
        println!("skills:            {}", result.skills);
    }
    println!();
    println!("attack:            {:.1}", result.attack);
    println!("affinity:          {:.1}%", result.affinity);
    if result.element > 0.0 {
        println!("element:           {:.1}", result.element);
    }
    println!("expected attack:   {:.1}", result.expected_attack);
    println!("effective attack:  {:.1}", result.effective_attack);
    if result.effective_element > 0.0 {
        println!("effective element: {:.1}", result.effective_element);
    }
    println!();
    println!("combo time:        {:.2}s", result.combo_time);
    println!("total physical:    {:.1}", result.total_physical);
    println!("total elemental:   {:.1}", result.total_elemental);
    println!("physical dps:      {:.2}", result.physical_dps);
    println!("elemental dps:     {:.2}", result.elemental_dps);
    println!("total dps:         {:.2}", result.total_dps);
    println!();
    println!("sharpness hits:    {} (base {})", result.effective_hits, result.base_sharpness_hits);
    println!("combos until dull: {}", result.combo_count);
    println!("avg hit damage:    {:.1}", result.average_hit_damage);
    println!("damage until dull: {:.1}", result.total_damage_until_dull);
    println!("sustain duration:  {:.1}s", result.sustain_duration);
}

fn run(args: Args) -> Result<(), CalcError> {
    let data = match &args.data_dir {
        Some(dir) => match GameData::load(dir) {
            Ok(data) => data,
            Err(err) => {
                eprintln!("failed to load data from {}: {err}", dir.display());
                GameData::default()
            }
        },
        None => GameData::default(),
    };
    debug!(
        weapons = data.weapons.len(),
        monsters = data.monsters.len(),
        combos = data.combos.len(),
        "tables loaded"
    );

    let mut calc = Calculator::new(data);
    if let Some(dir) = &args.log_dir {
        calc = calc.with_logger(Box::new(CsvResultLogger::new(
            dir.join("results.csv"),
            dir.join("results_readable.csv"),
        )));
    }

    let result = calc.calculate(&args.request)?;
    print_result(&result);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match run(parsed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_spec_with_rate() {
        let (name, skill) = parse_skill_spec("attack_boost:4:80").unwrap();
        assert_eq!(name, "attack_boost");
        assert_eq!(skill.level, 4);
        assert!((skill.rate - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_skill_spec_defaults_to_full_rate() {
        let (_, skill) = parse_skill_spec("critical_eye:3").unwrap();
        assert!((skill.rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_skill_spec_rejects_garbage() {
        assert!(parse_skill_spec("attack_boost").is_err());
        assert!(parse_skill_spec(":4").is_err());
        assert!(parse_skill_spec("attack_boost:high").is_err());
        assert!(parse_skill_spec("attack_boost:4:150").is_err());
    }

    #[test]
    fn test_parse_args_requires_four_positionals() {
        let args: Vec<String> = ["iron_blade", "forest_brute", "head"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn test_parse_args_full() {
        let args: Vec<String> = [
            "--data",
            "/tmp/data",
            "iron_blade",
            "forest_brute",
            "head",
            "triple_slash",
            "attack_boost:4",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let parsed = parse_args(&args).unwrap();
        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(parsed.request.weapon, "iron_blade");
        assert_eq!(parsed.request.combo, "triple_slash");
        assert_eq!(parsed.request.skills.len(), 1);
    }
}
