//! Environment the analyzer runs with.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Variables forced into the child environment, overriding anything
/// inherited: UTF-8 text I/O with lossy substitution, unbuffered output, no
/// bytecode cache, the plain `malloc` allocator, and a UTF-8 locale.
pub const OVERLAY: [(&str, &str); 9] = [
    ("PYTHONIOENCODING", "utf-8:replace"),
    ("PYTHONUTF8", "1"),
    ("PYTHONLEGACYWINDOWSSTDIO", "0"),
    ("LANG", "en_US.UTF-8"),
    ("LC_ALL", "en_US.UTF-8"),
    ("PYTHONUNBUFFERED", "1"),
    ("PYTHONDONTWRITEBYTECODE", "1"),
    ("PYTHONMALLOC", "malloc"),
    ("PYTHONCOERCECLOCALE", "0"),
];

/// Builds the full environment for the analyzer: the launcher's own
/// environment with [`OVERLAY`] merged on top.
pub fn child_env() -> BTreeMap<OsString, OsString> {
    merge(std::env::vars_os())
}

fn merge(
    inherited: impl IntoIterator<Item = (OsString, OsString)>,
) -> BTreeMap<OsString, OsString> {
    let mut env: BTreeMap<OsString, OsString> = inherited.into_iter().collect();
    for (name, value) in OVERLAY {
        env.insert(name.into(), value.into());
    }

    env
}
