/*
 * IP Detail
 * Copyright (C) 2024 Akaere Networks
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */

use anyhow::Result;
use clap::Parser;

use ip_detail::config::Cli;
use ip_detail::core::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_from_args(args.debug, args.trace);

    let report = ip_detail::run(&args)?;
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
