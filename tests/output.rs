//! End-to-end checks against the built binary

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use example_app::config::MESSAGE;

const BIN: &str = env!("CARGO_BIN_EXE_example-app");

fn spawn() -> Child {
    Command::new(BIN)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start example-app")
}

fn stop(mut child: Child) -> (Vec<u8>, Vec<u8>) {
    // Still running means it did not exit on its own
    assert!(child.try_wait().expect("try_wait").is_none());
    child.kill().expect("kill");
    let output = child.wait_with_output().expect("wait");
    (output.stdout, output.stderr)
}

fn count_messages(stdout: &[u8]) -> usize {
    assert_eq!(stdout.len() % MESSAGE.len(), 0, "partial message in {:?}", stdout);
    for chunk in stdout.chunks(MESSAGE.len()) {
        assert_eq!(chunk, &MESSAGE[..]);
    }
    stdout.len() / MESSAGE.len()
}

#[test]
fn prints_once_per_second() {
    // Messages land at t = 0, 1 and 2 seconds
    let child = spawn();
    thread::sleep(Duration::from_millis(2500));
    let (stdout, _) = stop(child);
    assert_eq!(count_messages(&stdout), 3);
}

#[test]
fn stdout_carries_only_the_message() {
    let child = spawn();
    thread::sleep(Duration::from_millis(500));
    let (stdout, stderr) = stop(child);
    assert_eq!(stdout, MESSAGE);

    let log = String::from_utf8(stderr).expect("stderr is utf-8");
    assert!(log.contains("[INFO ]"), "no startup log line in {:?}", log);
}

#[test]
fn messages_are_spaced_by_the_interval() {
    let mut child = spawn();
    let mut stdout = child.stdout.take().expect("piped stdout");

    let mut arrivals = Vec::new();
    let mut buf = [0u8; 20];
    let start = Instant::now();
    for _ in 0..2 {
        stdout.read_exact(&mut buf).expect("read message");
        assert_eq!(&buf, MESSAGE);
        arrivals.push(start.elapsed());
    }
    child.kill().expect("kill");
    let _ = child.wait();

    let gap = arrivals[1] - arrivals[0];
    assert!(gap >= Duration::from_millis(900), "gap too short: {:?}", gap);
    assert!(gap < Duration::from_millis(1900), "gap too long: {:?}", gap);
}
