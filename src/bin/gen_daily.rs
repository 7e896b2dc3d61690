/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::time::Instant;
use chrono::NaiveDate;
use vault_site::vault::{select_solutions, vault_day, Grid, PuzzleSeed, DATA};

// usage: gen_daily [YYYY-MM-DD | practice <millis>], defaults to today
fn parse_seed(args: &[String]) -> PuzzleSeed {
    match args {
        [] => PuzzleSeed::Daily(chrono::Local::now().date_naive()),
        [mode, millis] if mode == "practice" => PuzzleSeed::Practice(millis.parse().expect("practice seed should be a number")),
        [date] => PuzzleSeed::Daily(NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date should be YYYY-MM-DD")),
        _ => panic!("usage: gen_daily [YYYY-MM-DD | practice <millis>]"),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = parse_seed(&args);

    let start_at = Instant::now();
    let solutions = select_solutions(&DATA.solution_pool, &seed).expect("should select solutions");
    let grid = Grid::build(solutions.words(), &mut rand::thread_rng()).expect("should build grid");
    let dur = start_at.elapsed();
    eprintln!(
        "picked from {} words (seed '{}') in {:.3}s",
        DATA.solution_pool.len(),
        seed.seed_string(),
        dur.as_secs_f64()
    );

    match seed.date() {
        Some(date) => println!("vault #{} ({})", vault_day(date), date),
        None => println!("{}", seed),
    }
    for (slot, word) in solutions.iter().enumerate() {
        println!("{} {}", slot + 1, word);
    }
    println!();
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|cell| cell.character.to_string()).collect();
        println!("{}", line.join(" "));
    }
}
