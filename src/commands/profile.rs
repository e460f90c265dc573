// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;

use crate::models::{EmploymentStatus, HousingType, TransportType, UserProfile};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_day, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_housing(s: &str) -> Result<HousingType> {
    match s {
        "proprietaire" => Ok(HousingType::Proprietaire),
        "locataire" => Ok(HousingType::Locataire),
        "heberge" => Ok(HousingType::Heberge),
        _ => bail!("Invalid housing type '{}'", s),
    }
}

fn parse_transport(s: &str) -> Result<TransportType> {
    match s {
        "voiture" => Ok(TransportType::Voiture),
        "moto" => Ok(TransportType::Moto),
        "transport_commun" => Ok(TransportType::TransportCommun),
        _ => bail!("Invalid transport type '{}'", s),
    }
}

fn parse_employment(s: &str) -> Result<EmploymentStatus> {
    match s {
        "salarie" => Ok(EmploymentStatus::Salarie),
        "independant" => Ok(EmploymentStatus::Independant),
        "etudiant" => Ok(EmploymentStatus::Etudiant),
        "retraite" => Ok(EmploymentStatus::Retraite),
        "autre" => Ok(EmploymentStatus::Autre),
        _ => bail!("Invalid employment status '{}'", s),
    }
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let salary = parse_decimal(sub.get_one::<String>("salary").unwrap())?;
    if salary <= Decimal::ZERO {
        bail!("Salary must be positive");
    }
    let profile = UserProfile {
        salary,
        salary_date: parse_day(sub.get_one::<String>("salary-date").unwrap())?,
        dependents: *sub.get_one::<u32>("dependents").unwrap(),
        housing_type: parse_housing(sub.get_one::<String>("housing").unwrap())?,
        transport_type: parse_transport(sub.get_one::<String>("transport").unwrap())?,
        employment_status: parse_employment(sub.get_one::<String>("employment").unwrap())?,
    };
    store.save_profile(&profile)?;
    let settings = store.settings()?;
    println!(
        "Profile saved: salary {} landing on day {}",
        fmt_money(&profile.salary, &settings.currency),
        profile.salary_date
    );
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(profile) = store.profile()? else {
        println!("No profile yet. Run 'centime profile set' first");
        return Ok(());
    };
    if !maybe_print_json(json_flag, jsonl_flag, &profile)? {
        let ccy = store.settings()?.currency;
        let rows = vec![
            vec!["Salary".into(), fmt_money(&profile.salary, &ccy)],
            vec!["Salary day".into(), profile.salary_date.to_string()],
            vec!["Dependents".into(), profile.dependents.to_string()],
            vec!["Housing".into(), format!("{:?}", profile.housing_type)],
            vec!["Transport".into(), format!("{:?}", profile.transport_type)],
            vec!["Employment".into(), format!("{:?}", profile.employment_status)],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}
