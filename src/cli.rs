// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("centime")
        .version(crate_version!())
        .about("Personal budget tracking, monthly planning, and spending advice")
        .subcommand(Command::new("init").about("Initialize the data store"))
        .subcommand(profile_cmd())
        .subcommand(charge_cmd())
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(json_flags(
            Command::new("advice").about("Personalized advice for the current month"),
        ))
        .subcommand(report_cmd())
        .subcommand(goal_cmd())
        .subcommand(settings_cmd())
}

fn profile_cmd() -> Command {
    Command::new("profile")
        .about("Financial profile (onboarding)")
        .subcommand(
            Command::new("set")
                .about("Create or update the profile")
                .arg(
                    Arg::new("salary")
                        .long("salary")
                        .required(true)
                        .help("Net monthly salary"),
                )
                .arg(
                    Arg::new("salary-date")
                        .long("salary-date")
                        .default_value("1")
                        .help("Day of month the salary lands (1-31)"),
                )
                .arg(
                    Arg::new("dependents")
                        .long("dependents")
                        .value_parser(value_parser!(u32))
                        .default_value("0"),
                )
                .arg(
                    Arg::new("housing")
                        .long("housing")
                        .value_parser(["proprietaire", "locataire", "heberge"])
                        .default_value("locataire"),
                )
                .arg(
                    Arg::new("transport")
                        .long("transport")
                        .value_parser(["voiture", "moto", "transport_commun"])
                        .default_value("transport_commun"),
                )
                .arg(
                    Arg::new("employment")
                        .long("employment")
                        .value_parser(["salarie", "independant", "etudiant", "retraite", "autre"])
                        .default_value("salarie"),
                ),
        )
        .subcommand(json_flags(Command::new("show").about("Show the profile")))
}

fn charge_cmd() -> Command {
    Command::new("charge")
        .about("Fixed monthly charges")
        .subcommand(
            Command::new("add")
                .about("Add a fixed charge")
                .arg(Arg::new("type").long("type").required(true))
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("due-date")
                        .long("due-date")
                        .default_value("1")
                        .help("Day of month the charge is due (1-31)"),
                ),
        )
        .subcommand(json_flags(Command::new("list").about("List fixed charges")))
        .subcommand(
            Command::new("update")
                .about("Update a fixed charge by id")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                .arg(Arg::new("type").long("type"))
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("due-date").long("due-date")),
        )
        .subcommand(
            Command::new("rm")
                .about("Remove a fixed charge by id")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        )
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Income and expense transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["income", "expense"])
                        .required(true),
                )
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .default_value(""),
                )
                .arg(Arg::new("subcategory").long("subcategory"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(Arg::new("month").long("month").help("Filter by month YYYY-MM"))
                .arg(Arg::new("category").long("category"))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["income", "expense"]),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("rm")
                .about("Remove a transaction by id")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        )
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Monthly budget plan")
        .subcommand(
            Command::new("plan")
                .about("Build the plan with the step-by-step wizard")
                .arg(
                    Arg::new("auto")
                        .long("auto")
                        .action(ArgAction::SetTrue)
                        .help("Accept every suggestion without prompting"),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set one category allocation")
                .arg(Arg::new("category").required(true))
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(json_flags(Command::new("show").about("Show the plan")))
        .subcommand(json_flags(
            Command::new("report").about("Current-month spending against the plan"),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Monthly statistics")
        .subcommand(json_flags(
            Command::new("summary").about("Current-month overview"),
        ))
        .subcommand(json_flags(
            Command::new("categories").about("Current-month expenses by category"),
        ))
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Savings goals")
        .subcommand(
            Command::new("add")
                .about("Add a savings goal")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("target").long("target").required(true))
                .arg(Arg::new("saved").long("saved").default_value("0")),
        )
        .subcommand(json_flags(Command::new("list").about("List savings goals")))
        .subcommand(
            Command::new("fund")
                .about("Add to a goal's saved amount")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(
            Command::new("rm")
                .about("Remove a savings goal by id")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        )
}

fn settings_cmd() -> Command {
    Command::new("settings")
        .about("Display settings and data management")
        .subcommand(json_flags(Command::new("show").about("Show settings")))
        .subcommand(
            Command::new("set")
                .about("Change settings")
                .arg(Arg::new("currency").long("currency"))
                .arg(
                    Arg::new("notifications")
                        .long("notifications")
                        .value_parser(["true", "false"]),
                ),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete ALL stored data")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the irreversible wipe"),
                ),
        )
}
