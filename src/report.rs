use happy_hours::{Coordinate, FilterCriteria, Matcher, UnparsableTime, Venue, shadowed_venues, weekday_name};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, code: &str, s: impl AsRef<str>) -> String {
            match self.enabled {
                true => format!("{code}{}{RESET}", s.as_ref()),
                false => s.as_ref().to_string(),
            }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(color, s)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(BOLD, s)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(DIM, s)
        }

        /// Check mark for a matching schedule entry, dot otherwise.
        pub fn mark(&self, matched: bool) -> String {
            if matched { self.paint("✓", GREEN) } else { self.dim("·") }
        }
    }
}

pub fn print_run(
    criteria: &FilterCriteria,
    results: &[&Venue],
    tap: Option<(Coordinate, Option<&Venue>)>,
    color: bool,
) {
    let palette = ansi::Palette::new(color);
    let matcher = Matcher::new(criteria);

    println!("\n{}", palette.paint("━━━ Filter ━━━", ansi::GRAY));
    print_criteria(criteria, &matcher, &palette);

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if results.is_empty() {
        println!("{}", palette.dim("  No venues match"));
        println!("\n{}", palette.paint("Try:", ansi::YELLOW));
        println!("  • Selecting more days (or none for every day)");
        println!("  • Widening the time window");
        println!("  • Clearing the search or location text");
    } else {
        for (idx, venue) in results.iter().enumerate() {
            print_venue(idx, venue, &matcher, &palette);
        }
    }

    let shadowed = shadowed_venues(results.iter().copied());
    if !shadowed.is_empty() {
        println!("\n{}", palette.paint("Shared coordinates (not reachable by map tap):", ansi::YELLOW));
        for venue in shadowed {
            println!("  {} {}", palette.paint(format!("#{}", venue.id), ansi::GRAY), venue.name);
        }
    }

    if let Some((coordinate, hit)) = tap {
        println!("\n{}", palette.paint("━━━ Tap ━━━", ansi::GRAY));
        let at = format!("({}, {})", coordinate.latitude, coordinate.longitude);
        match hit {
            Some(venue) => println!(
                "  {} {} {}",
                palette.paint(at, ansi::YELLOW),
                palette.dim("→"),
                palette.bold(palette.paint(format!("#{} {}", venue.id, venue.name), ansi::GREEN))
            ),
            None => println!("  {} {}", palette.paint(at, ansi::YELLOW), palette.dim("→ no venue at this coordinate")),
        }
    }

    println!(
        "\n  {}",
        palette.dim(format!("{} venue{} shown", results.len(), if results.len() == 1 { "" } else { "s" }))
    );
    println!();
}

fn print_criteria(criteria: &FilterCriteria, matcher: &Matcher, palette: &ansi::Palette) {
    let days = if criteria.selected_days.is_empty() {
        "any day".to_string()
    } else {
        criteria.selected_days.days().map(weekday_name).collect::<Vec<_>>().join(", ")
    };
    let window = if matcher.is_unrestricted() {
        "any time".to_string()
    } else {
        format!("{} – {}", criteria.start_time, criteria.end_time)
    };

    println!("  {} {}", palette.dim("days:"), palette.paint(days, ansi::BLUE));
    println!("  {} {}", palette.dim("time:"), palette.paint(window, ansi::BLUE));
    if !criteria.search_text.is_empty() {
        println!("  {} {}", palette.dim("name:"), palette.paint(&criteria.search_text, ansi::CYAN));
    }
    if !criteria.location_text.is_empty() {
        println!("  {} {}", palette.dim("where:"), palette.paint(&criteria.location_text, ansi::CYAN));
    }
    if criteria.unparsable == UnparsableTime::Reject {
        println!("  {}", palette.dim("strict: unparsable times never match"));
    }
}

fn print_venue(idx: usize, venue: &Venue, matcher: &Matcher, palette: &ansi::Palette) {
    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        palette.bold(palette.paint(&venue.name, ansi::GREEN)),
        palette.dim("│"),
        palette.paint(format!("#{}", venue.id), ansi::YELLOW),
    );
    println!("      {}", palette.dim(venue.full_address()));

    for entry in &venue.schedule {
        let mark = palette.mark(matcher.matches(entry));
        let mut line = format!("{}: {} - {}", weekday_name(entry.day), entry.start_time, entry.end_time);
        if !entry.specials.is_empty() {
            line.push_str(&format!("  {}", palette.dim(&entry.specials)));
        }
        println!("      {} {}", mark, line);
    }
}
