use std::env;
use std::fs;
use std::process;

use fretboard::{
    chord_info, degree_label, generate_with_stats, ranking_score, ChordRequest, VoicingBrowser,
};

fn usage() -> ! {
    eprintln!("Usage: fretboard <request.yaml> [--json] [--verbose] [--pick N]");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut input_path: Option<&String> = None;
    let mut json = false;
    let mut verbose = false;
    let mut pick: usize = 0;

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--verbose" => verbose = true,
            "--pick" => {
                pick = match iter.next().map(|n| n.parse::<usize>()) {
                    Some(Ok(n)) => n,
                    _ => usage(),
                };
            }
            _ if input_path.is_none() && !arg.starts_with("--") => input_path = Some(arg),
            _ => usage(),
        }
    }
    let input_path = match input_path {
        Some(path) => path,
        None => usage(),
    };

    // Read request
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let request = match ChordRequest::from_yaml(&source) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Request error: {}", e);
            process::exit(1);
        }
    };

    // Generate
    let root = request.chord.root;
    let formula = request.chord.formula();
    let (voicings, stats) = generate_with_stats(&request.tuning, root, &formula, &request.options);

    if verbose {
        eprintln!(
            "Searched {} nodes ({} pruned), {} complete assignments, {} accepted",
            stats.nodes_visited, stats.branches_pruned, stats.leaves, stats.accepted
        );
        eprintln!(
            "Dropped {} duplicates, {} outside the position box, {} with a distant anchor",
            stats.duplicates, stats.dropped_by_box, stats.dropped_by_anchor
        );
    }

    // Output
    if json {
        match serde_json::to_string_pretty(&voicings) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error encoding voicings: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Chord: {}", request.chord);
    println!("Tuning: {}", request.tuning.string_names().join(" "));
    let rows = chord_info(root, &formula);
    let notes: Vec<&str> = rows.iter().map(|r| r.note).collect();
    let intervals: Vec<&str> = rows.iter().map(|r| r.interval).collect();
    println!("Notes: {}", notes.join(" "));
    println!("Intervals: {}", intervals.join(" "));
    println!();

    let mut browser = VoicingBrowser::new(voicings);
    if browser.is_empty() {
        println!("{}", browser.summary());
        return;
    }

    println!("{} voicings", browser.len());
    let position = request.options.preferred_position;
    for (i, v) in browser.voicings().iter().enumerate() {
        let degrees: Vec<&str> = v
            .strings
            .iter()
            .enumerate()
            .map(|(string, s)| match s.fret() {
                Some(f) => degree_label(request.tuning.pitch_class_at(string, f), root),
                None => "x",
            })
            .collect();
        println!(
            "#{:<3} {:<18} {:<18} {:<4} span {}  score {:.2}",
            i + 1,
            v.to_string(),
            degrees.join(" "),
            v.inversion,
            v.span,
            ranking_score(v, root, &request.tuning, position)
        );
    }

    for _ in 0..pick {
        browser.next_voicing();
    }
    println!();
    println!("{}", browser.summary());
}
