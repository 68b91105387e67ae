const NAMES: [&str; 9] = [
    "PYTHONIOENCODING",
    "PYTHONUTF8",
    "PYTHONLEGACYWINDOWSSTDIO",
    "LANG",
    "LC_ALL",
    "PYTHONUNBUFFERED",
    "PYTHONDONTWRITEBYTECODE",
    "PYTHONMALLOC",
    "PYTHONCOERCECLOCALE",
];

fn main() {
    for name in NAMES {
        println!("{name}={}", std::env::var(name).unwrap_or_default());
    }
}
