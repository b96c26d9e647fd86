//! Banner rendering for the interactive shell. Every reply is framed
//! between horizontal rules so it stands apart from the user's input.

const LINE: &str = "____________________________________________";

pub fn print_line() {
    println!("{}", LINE);
}

pub fn print_message(message: &str) {
    print_line();
    println!("{}", message);
    print_line();
}

pub fn print_welcome() {
    print_message("Hello! I'm Taskpad\nWhat can I do for you?");
}
