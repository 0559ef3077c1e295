/// Widest decimal rendering of an i32, sign included.
const MAX_EXPANSION_WIDTH: usize = 11;

pub(crate) trait EnvironmentHandler {
    fn expand_variables(&self, input: &str) -> String;
}

impl EnvironmentHandler for super::Shell {
    fn expand_variables(&self, input: &str) -> String {
        expand(input, self.session.last_status(), self.session.pid())
    }
}

/// Replaces `$?` with `status` and `$$` with `pid` in one left-to-right
/// pass. Replacement text is never rescanned and any other `$` is kept.
pub fn expand(input: &str, status: i32, pid: u32) -> String {
    let dollars = input.matches('$').count();
    let mut output = String::with_capacity(input.len() + dollars * MAX_EXPANSION_WIDTH);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }

        match chars.peek() {
            Some('?') => {
                chars.next();
                output.push_str(&status.to_string());
            }
            Some('$') => {
                chars.next();
                output.push_str(&pid.to_string());
            }
            _ => output.push('$'),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_status() {
        assert_eq!(expand("echo $?", 3, 100), "echo 3");
        assert_eq!(expand("echo $?", -1, 100), "echo -1");
    }

    #[test]
    fn test_pid() {
        assert_eq!(expand("echo $$", 0, 4242), "echo 4242");
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(expand("$?$$$?", 7, 12), "7127");
    }

    #[test]
    fn test_other_dollar_sequences_pass_through() {
        assert_eq!(expand("echo $HOME $1 $", 0, 1), "echo $HOME $1 $");
    }

    #[test]
    fn test_trailing_dollar() {
        assert_eq!(expand("cost$", 0, 1), "cost$");
    }

    #[test]
    fn test_no_recursive_expansion() {
        assert_eq!(expand("$$?", 5, 9), "9?");
        assert_eq!(expand("$$$", 5, 9), "9$");
    }

    #[test]
    fn test_extreme_status_fits() {
        let expanded = expand("$?$?", i32::MIN, 1);
        assert_eq!(expanded, format!("{}{}", i32::MIN, i32::MIN));
        assert!(expanded.capacity() >= 2 * MAX_EXPANSION_WIDTH);
    }
}
