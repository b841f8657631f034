//! Classification of REPL input lines

use parley_domain::MessageOption;

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Quit,
    Help,
    Start,
    Stop,
    Status,
    /// Reprint the options of the latest reply
    Options,
    /// A numbered option of the latest reply
    Select(MessageOption),
    /// Anything else is sent to the endpoint verbatim, including intents
    /// such as `/greet`
    Say(&'a str),
}

impl<'a> ReplInput<'a> {
    /// `options` are those of the latest reply, numbered from 1
    pub fn parse(line: &'a str, options: Option<&[MessageOption]>) -> Self {
        let line = line.trim();
        match line {
            "/quit" | "/exit" | "/q" => return Self::Quit,
            "/help" | "/h" | "/?" => return Self::Help,
            "/start" => return Self::Start,
            "/stop" => return Self::Stop,
            "/status" => return Self::Status,
            "/options" => return Self::Options,
            _ => {}
        }

        if let (Some(options), Ok(n)) = (options, line.parse::<usize>())
            && let Some(option) = n.checked_sub(1).and_then(|i| options.get(i))
        {
            return Self::Select(option.clone());
        }

        Self::Say(line)
    }
}
