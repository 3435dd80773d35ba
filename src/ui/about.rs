//! Static help banner and the end-of-run summary line.

use colored::Colorize;

use crate::core::list::Totals;
use crate::core::size::format_size;

/// The `-h` banner, line by line: logo, history blurb, flag table, usage
/// examples.
pub fn about_lines() -> Vec<String> {
    vec![
        r"  ____      _            ____  _      _ ".red().to_string(),
        r" / ___|___ | | ___  _ __|  _ \(_)_ __| |".yellow().to_string(),
        r"| |   / _ \| |/ _ \| '__| | | | | '__| |".green().to_string(),
        r"| |__| (_) | | (_) | |  | |_| | | |  |_|".cyan().to_string(),
        r" \____\___/|_|\___/|_|  |____/|_|_|  (_)".bright_magenta().to_string(),
        "           !!About ColorDir. v. beta 0.3".bright_blue().to_string(),
        "This program lists directory contents with color coding.".cyan().to_string(),
        "History:".cyan().to_string(),
        "About 30 years ago, I discovered HDIR, a simple tool that brought color to my directory listings in DOS.".cyan().to_string(),
        "I loved it then, and today, I set out to create a tribute to it: ColorDir.".cyan().to_string(),
        "Not as a replacement for ls and its deeper functionalities,".cyan().to_string(),
        "but as both a nostalgic homage and an aesthetically pleasing way to view files, wrapped in the colors of the past.".cyan().to_string(),
        "Best regards 💌 endre@neset.love".cyan().to_string(),
        String::new(),
        " -l, --list       Force list view.".to_string(),
        " -w, --wide       Force columns view.".to_string(),
        " -t, --total      Display total size of directories, and subdirectories.".to_string(),
        " -r, --recursive  Recursive listing.".to_string(),
        " -p, --pause      Pause after each screen of output.".to_string(),
        " -h, --help       Display this screen.".to_string(),
        String::new(),
        "Usage: c [flags] [directory] [pattern, must be inside quotes \"\" and must contain at least one * or ?]".to_string(),
        "Examples:".to_string(),
        "1. List all files in the current directory (default):       c".to_string(),
        "2. List all files recursively with detailed listing:        c -r -l".to_string(),
        "3. List files in wide format, recursively:                  c -r -w".to_string(),
        "4. List all .txt files recursively:                         c -r \"*.txt\"".to_string(),
        "5. List .txt files in /home/user/docs directory:            c /home/user/docs \"*.txt\"".to_string(),
        "6. List .log files in /var/log directory:                   c /var/log \"*.log\"".to_string(),
        "7. List files in /usr, paused for viewing, recursively:     c -p -r /usr".to_string(),
        "8. List .config files in /etc directory recursively:        c -r /etc \"*.config\"".to_string(),
        "9. List all files containing an x:                          c  \"*[x]*\"".to_string(),
        "10. List files that do not contain a number:                c \"*[!0-9]*\"".to_string(),
    ]
}

/// Print the `-h` banner.
pub fn print_about() {
    for line in about_lines() {
        println!("{line}");
    }
}

/// The summary text, without the separator rule.
pub fn summary_text(totals: &Totals) -> String {
    format!(
        "Total: Files: {} | Dirs: {} | Size: {}",
        totals.files,
        totals.dirs,
        format_size(totals.bytes)
    )
}

/// Print the summary preceded by a rule sized to the text.
pub fn print_summary(totals: &Totals) {
    let text = summary_text(totals);
    let rule = "─".repeat(text.chars().count());
    println!("{}", rule.bright_yellow());
    println!("{text}");
}
