/// Test data generator for Finder Algo
///
/// Generates a CSV of synthetic catalog projects that can be imported
/// into the projects table for local matching runs.

use std::fs::File;
use std::io::{BufWriter, Write};

const TITLE_SUBJECTS: &[&str] = &[
    "Table Runner", "Wall Hanging", "Pot Holder", "Baby Quilt", "Tote Bag",
    "Mug Rug", "Placemat Set", "Pillow Cover", "Apron", "Bib Set",
    "Coaster Set", "Advent Calendar", "Door Banner", "Gift Tags", "Memory Quilt",
];

const TITLE_STYLES: &[&str] = &[
    "Scrappy", "Modern", "Classic", "Patchwork", "Appliqué",
    "Monogrammed", "Rainbow", "Farmhouse", "Holiday", "Heirloom",
];

const CATEGORIES: &[&str] = &["Gifts", "Home Decor", "Kitchen", "Baby", "Seasonal"];
const MACHINES: &[&str] = &["AccuQuilt", "Embroidery", "Scan N Cut"];
const TIME_ESTIMATES: &[&str] = &["4-6 hrs", "8-12 hrs", "16-20 hrs"];
const SKILL_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

struct CatalogProject {
    id: usize,
    title: String,
    category: String,
    time_estimate: String,
    is_stash_buster: bool,
    machines_required: String,
    skill_level: String,
}

// Simple random number generator using system time
fn get_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64
}

fn rand_int(max: usize) -> usize {
    (get_seed() % max as u64) as usize
}

fn rand_choice<'a>(options: &'a [&'a str]) -> &'a str {
    options[rand_int(options.len())]
}

fn rand_choices(options: &[&str], count: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut used = std::collections::HashSet::new();
    let mut attempts = 0;
    while result.len() < count.min(options.len()) && attempts < 100 {
        let idx = rand_int(options.len());
        if used.insert(idx) {
            result.push(options[idx].to_string());
        }
        attempts += 1;
    }
    result
}

fn json_list(items: &[String]) -> String {
    if items.is_empty() {
        "[]".to_string()
    } else {
        format!("[\"{}\"]", items.join("\",\""))
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace("\"", "\"\""))
    } else {
        s.to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_projects = 200;

    println!("Generating {} test projects...", num_projects);

    let mut projects = Vec::new();

    for project_num in 0..num_projects {
        std::thread::sleep(std::time::Duration::from_millis(1)); // Seed variation

        // 0-2 categories; a few rows get none so the permissive rules
        // also see catalog gaps
        let categories = rand_choices(CATEGORIES, rand_int(3));
        // Most projects need at most one machine
        let machines = rand_choices(MACHINES, rand_int(5) / 2);

        let project = CatalogProject {
            id: project_num + 1,
            title: format!(
                "{} {}",
                rand_choice(TITLE_STYLES),
                rand_choice(TITLE_SUBJECTS)
            ),
            category: json_list(&categories),
            time_estimate: rand_choice(TIME_ESTIMATES).to_string(),
            is_stash_buster: rand_int(10) > 6, // 30% stash busters
            machines_required: json_list(&machines),
            skill_level: rand_choice(SKILL_LEVELS).to_string(),
        };

        projects.push(project);
    }

    let file = File::create("test_projects.csv")?;
    let mut csv = BufWriter::new(file);

    writeln!(
        csv,
        "id,title,category,time_estimate,is_stash_buster,machines_required,skill_level"
    )?;
    for p in &projects {
        writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            p.id,
            escape_csv(&p.title),
            escape_csv(&p.category),
            escape_csv(&p.time_estimate),
            p.is_stash_buster,
            escape_csv(&p.machines_required),
            escape_csv(&p.skill_level),
        )?;
    }

    println!("Created test_projects.csv with {} projects", projects.len());

    Ok(())
}
