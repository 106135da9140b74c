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
use std::io::Cursor;

use tbcload::codec;
use tbcload::parser::new_parser;

/// Builds a minimal but structurally complete `.tbc`-shaped file: one
/// procedure with a two-instruction body (`push1 lit#0`, `pop`), one
/// string literal, no exception ranges and no auxiliary data.
fn build_file() -> Vec<u8> {
    let bytecode = [1u8, 0, 3]; // push1 lit#0; pop
    let mut lines: Vec<String> = vec![
        "TclPro ByteCode 1.0".to_string(),
        "proc greet 0 %".to_string(),
        bytecode.len().to_string(),
        String::from_utf8(codec::encode(&bytecode)).unwrap(),
        "0".to_string(),
        String::from_utf8(codec::encode(&[])).unwrap(),
        "0".to_string(),
        String::from_utf8(codec::encode(&[])).unwrap(),
        "1".to_string(), // one literal
        "s".to_string(),
        "hello".to_string(),
        "0".to_string(), // no exception ranges
        "0".to_string(), // no aux data
    ];
    let mut out = String::new();
    for line in lines.drain(..) {
        out.push_str(&line);
        out.push('\n');
    }
    out.into_bytes()
}

#[test]
fn test_parse_hex_mode_end_to_end() {
    let input = build_file();
    let mut output = Vec::new();
    {
        let mut parser = new_parser(Cursor::new(input), &mut output);
        parser.parse().unwrap();
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("proc greet 0 %"));
    assert!(text.contains("[lit-1]"));
    assert!(text.contains("hello"));
}

#[test]
fn test_parse_detail_mode_end_to_end() {
    let input = build_file();
    let mut output = Vec::new();
    {
        let mut parser = new_parser(Cursor::new(input), &mut output);
        parser.set_detail(true);
        parser.parse().unwrap();
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\t(0)push1 0\n"));
    assert!(text.contains("\t(2)pop\n"));
}

#[test]
fn test_parse_nested_proc_literal() {
    let inner_bytecode = [0u8]; // done
    let mut lines: Vec<String> = vec![
        "TclPro ByteCode 1.0".to_string(),
        "proc outer 0 %".to_string(),
        "1".to_string(),
        String::from_utf8(codec::encode(&[0u8])).unwrap(),
        "0".to_string(),
        String::from_utf8(codec::encode(&[])).unwrap(),
        "0".to_string(),
        String::from_utf8(codec::encode(&[])).unwrap(),
        "1".to_string(), // one literal: the nested proc
        "p".to_string(),
        "proc inner 0 %".to_string(),
        inner_bytecode.len().to_string(),
        String::from_utf8(codec::encode(&inner_bytecode)).unwrap(),
        "0".to_string(),
        String::from_utf8(codec::encode(&[])).unwrap(),
        "0".to_string(),
        String::from_utf8(codec::encode(&[])).unwrap(),
        "0".to_string(), // inner literal table
        "0".to_string(), // inner exception ranges
        "0".to_string(), // inner aux data
        "0 0".to_string(), // numArgs, numCompiledLocals for the proc literal
        "0".to_string(), // outer exception ranges
        "0".to_string(), // outer aux data
    ];
    let input = {
        let mut out = String::new();
        for line in lines.drain(..) {
            out.push_str(&line);
            out.push('\n');
        }
        out.into_bytes()
    };

    let mut output = Vec::new();
    let mut parser = new_parser(Cursor::new(input), &mut output);
    parser.parse().unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("proc outer 0 %"));
    assert!(text.contains("proc inner 0 %"));
}

#[test]
fn test_parse_missing_header_is_an_error() {
    let input = b"just some text\nwith no header\n".to_vec();
    let mut output = Vec::new();
    let mut parser = new_parser(Cursor::new(input), &mut output);
    assert!(parser.parse().is_err());
}
