#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use minidb::{EMAIL_SIZE, TABLE_MAX_ROWS, USERNAME_SIZE};
    use predicates::prelude::*;

    fn run_commands<T: AsRef<str>>(commands: &[T]) -> Command {
        let mut cmd = Command::cargo_bin("db").expect("Failed to run command");

        let input = commands
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        cmd.write_stdin(input);
        cmd
    }

    #[test]
    fn it_inserts_and_retrieves_a_row() {
        let mut cmd = run_commands(&["insert 1 user1 abcd@vishu.com", "select", ".exit"]);

        let expected = [
            "db > Executed.",
            "db > (1, user1, abcd@vishu.com)",
            "Executed.",
            "db > ",
        ]
        .join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_prints_error_message_when_table_is_full() {
        let mut commands: Vec<String> = (1..=1401)
            .map(|i| format!("insert {i} user{i} person{i}@example.com"))
            .collect();
        commands.push(String::from(".exit"));

        let output = run_commands(&commands).assert().success().get_output().clone();
        let stdout = String::from_utf8(output.stdout).expect("stdout is not utf-8");
        let lines: Vec<&str> = stdout.split('\n').collect();

        assert_eq!(lines[lines.len() - 2], "db > Error: Table full.");
        assert_eq!(lines[lines.len() - 1], "db > ");
    }

    #[test]
    fn it_keeps_reporting_table_full_after_capacity() {
        let mut commands: Vec<String> = (0..TABLE_MAX_ROWS + 3)
            .map(|i| format!("insert {i} user{i} person{i}@example.com"))
            .collect();
        commands.push(String::from("select"));
        commands.push(String::from(".exit"));

        let mut expected_rows: Vec<String> = (0..TABLE_MAX_ROWS)
            .map(|i| format!("({i}, user{i}, person{i}@example.com)"))
            .collect();
        expected_rows.push(String::from("Executed."));

        let full = "db > Error: Table full.\n".repeat(3);

        run_commands(&commands)
            .assert()
            .success()
            .stdout(predicate::str::contains(full))
            .stdout(predicate::str::contains(expected_rows.join("\n")))
            .stdout(predicate::str::contains(format!("({TABLE_MAX_ROWS}, ")).not())
            .stdout(predicate::str::ends_with("db > "));
    }

    #[test]
    fn it_allows_inserting_strings_that_are_the_maximum_length() {
        let long_username = "a".repeat(USERNAME_SIZE);
        let long_email = "a".repeat(EMAIL_SIZE);

        let commands = [
            format!("insert 1 {} {}", &long_username, &long_email),
            String::from("select"),
            String::from(".exit"),
        ];

        let mut cmd = run_commands(&commands);

        let expected = [
            String::from("db > Executed."),
            format!("db > (1, {}, {})", long_username, long_email),
            String::from("Executed."),
            String::from("db > "),
        ]
        .join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_prints_error_message_if_strings_are_too_long() {
        let long_username = "a".repeat(USERNAME_SIZE + 1);
        let long_email = "a".repeat(EMAIL_SIZE + 1);

        let commands = [
            format!("insert 1 {} {}", &long_username, &long_email),
            String::from("select"),
            String::from(".exit"),
        ];

        let mut cmd = run_commands(&commands);

        let expected = ["db > String is too long.", "db > Executed.", "db > "].join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_prints_error_message_if_id_is_negative() {
        let mut cmd = run_commands(&["insert -1 user1 person1@example.com", "select", ".exit"]);

        let expected = ["db > ID must be positive.", "db > Executed.", "db > "].join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_reports_malformed_and_unrecognized_input() {
        let mut cmd = run_commands(&[
            "insert 1 user1",
            "insert one user1 person1@example.com",
            "update 1",
            ".tables",
            "select",
            ".exit",
        ]);

        let expected = [
            "db > Syntax error. Could not parse statement.",
            "db > Syntax error. Could not parse statement.",
            "db > Unrecognized keyword at start of 'update 1'.",
            "db > Unrecognized command '.tables'.",
            "db > Executed.",
            "db > ",
        ]
        .join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_exits_cleanly_at_end_of_input() {
        let mut cmd = run_commands(&["insert 1 user1 person1@example.com"]);

        let expected = ["db > Executed.", "db > "].join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_does_not_keep_data_between_runs() {
        let mut cmd = run_commands(&["insert 1 user1 person1@example.com", ".exit"]);
        cmd.assert().success();

        let mut cmd = run_commands(&["select", ".exit"]);
        let expected = ["db > Executed.", "db > "].join("\n");
        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_keeps_logs_off_stdout() {
        let mut cmd = run_commands(&["insert 1 user1 person1@example.com", ".exit"]);
        cmd.arg("--verbose").env_remove("RUST_LOG");

        let expected = ["db > Executed.", "db > "].join("\n");

        cmd.assert()
            .success()
            .stdout(expected)
            .stderr(predicate::str::contains("executing"));
    }
}
