// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::error::Error;
use std::fs::File;
use std::io::stdout;

use clap::{arg, Command};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use tbcload::parser::new_parser;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("tbcdis")
        .about("Disassembles a TclPro compiled bytecode (.tbc) file")
        .version("0.1.0")
        .arg(arg!(<file> "Path to the .tbc file to disassemble"))
        .arg(arg!(-d --detail "Emit a full per-instruction disassembly instead of a hex dump"))
        .arg(arg!(--verbose "Show verbose output"))
        .get_matches();

    if matches.is_present("verbose") {
        init_logging(LevelFilter::Trace);
    }

    let path = matches.get_one::<String>("file").unwrap();
    let input = File::open(path)?;

    let mut parser = new_parser(input, stdout());
    parser.set_detail(matches.is_present("detail"));

    if let Err(e) = parser.parse() {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(level: LevelFilter) {
    let encoder = PatternEncoder::new("[{l}] {m}{n}");
    //
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(encoder))
        .build();
    //
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .unwrap();
    //
    let _handle = log4rs::init_config(config).unwrap();
}
