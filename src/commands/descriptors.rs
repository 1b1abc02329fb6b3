//! Static description of the slash commands.
//!
//! The same descriptors are registered with Discord and used by the
//! [`Commander`](crate::commands::Commander) to tell known subcommands apart.

/// Type of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
}

#[derive(Debug)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
    /// `(label, value)` pairs, empty when any value is accepted
    pub choices: &'static [(&'static str, &'static str)],
    /// Inclusive bounds of an integer option
    pub range: Option<(u64, u64)>,
}

#[derive(Debug)]
pub struct SubcommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionDescriptor],
}

/// A slash command, with either subcommands or options of its own.
#[derive(Debug)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub subcommands: &'static [SubcommandDescriptor],
    pub options: &'static [OptionDescriptor],
}

impl CommandDescriptor {
    pub fn subcommand(&self, name: &str) -> Option<&SubcommandDescriptor> {
        self.subcommands.iter().find(|s| s.name == name)
    }
}

const fn required(name: &'static str, description: &'static str, kind: OptionKind) -> OptionDescriptor {
    OptionDescriptor {
        name,
        description,
        kind,
        required: true,
        choices: &[],
        range: None,
    }
}

const fn optional(name: &'static str, description: &'static str, kind: OptionKind) -> OptionDescriptor {
    OptionDescriptor {
        name,
        description,
        kind,
        required: false,
        choices: &[],
        range: None,
    }
}

const ID_OPTIONS: &[OptionDescriptor] = &[required("id", "対象のID", OptionKind::Integer)];

const KEYWORD_OPTIONS: &[OptionDescriptor] =
    &[required("keyword", "検索キーワード", OptionKind::String)];

const fn id_subcommand(name: &'static str, description: &'static str) -> SubcommandDescriptor {
    SubcommandDescriptor {
        name,
        description,
        options: ID_OPTIONS,
    }
}

const fn keyword_subcommand(name: &'static str, description: &'static str) -> SubcommandDescriptor {
    SubcommandDescriptor {
        name,
        description,
        options: KEYWORD_OPTIONS,
    }
}

const fn bare_subcommand(name: &'static str, description: &'static str) -> SubcommandDescriptor {
    SubcommandDescriptor {
        name,
        description,
        options: &[],
    }
}

const CATEGORY_OPTION: OptionDescriptor = OptionDescriptor {
    name: "category",
    description: "カテゴリ",
    kind: OptionKind::String,
    required: true,
    choices: &[("本", "book"), ("映画", "movie"), ("活動", "activity")],
    range: None,
};

/// Longest window of `reports recent`, in days.
pub const MAX_RECENT_DAYS: i64 = 3650;

const DAYS_OPTION: OptionDescriptor = OptionDescriptor {
    name: "days",
    description: "日数（デフォルト: 7日）",
    kind: OptionKind::Integer,
    required: false,
    choices: &[],
    range: Some((1, MAX_RECENT_DAYS as u64)),
};

const MEMO_OPTION: OptionDescriptor = optional("memo", "備考", OptionKind::String);

pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "book",
        description: "本の管理",
        subcommands: &[
            SubcommandDescriptor {
                name: "add",
                description: "本を追加",
                options: &[
                    required("title", "タイトル", OptionKind::String),
                    required("author", "作者", OptionKind::String),
                    OptionDescriptor {
                        name: "status",
                        description: "ステータス",
                        kind: OptionKind::String,
                        required: false,
                        choices: &[("買いたい", "want_to_buy"), ("積読", "want_to_read")],
                        range: None,
                    },
                    MEMO_OPTION,
                ],
            },
            id_subcommand("buy", "本を購入した"),
            id_subcommand("start", "読み始める"),
            id_subcommand("finish", "読み終わる"),
            bare_subcommand("list", "本一覧"),
            bare_subcommand("wishlist", "買いたい本一覧"),
        ],
        options: &[],
    },
    CommandDescriptor {
        name: "movie",
        description: "映画の管理",
        subcommands: &[
            SubcommandDescriptor {
                name: "add",
                description: "映画を追加",
                options: &[required("title", "タイトル", OptionKind::String), MEMO_OPTION],
            },
            id_subcommand("watch", "視聴済みにする"),
            id_subcommand("skip", "見逃した"),
            bare_subcommand("list", "映画一覧"),
        ],
        options: &[],
    },
    CommandDescriptor {
        name: "activity",
        description: "活動の管理",
        subcommands: &[
            SubcommandDescriptor {
                name: "add",
                description: "活動を追加",
                options: &[required("content", "活動内容", OptionKind::String), MEMO_OPTION],
            },
            id_subcommand("done", "実行済みにする"),
            id_subcommand("skip", "やり逃した"),
            bare_subcommand("list", "活動一覧"),
        ],
        options: &[],
    },
    CommandDescriptor {
        name: "report",
        description: "日報を記録",
        subcommands: &[],
        options: &[
            CATEGORY_OPTION,
            required("id", "対象のID", OptionKind::Integer),
            required("content", "内容", OptionKind::String),
        ],
    },
    CommandDescriptor {
        name: "reports",
        description: "レポート履歴を表示",
        subcommands: &[
            SubcommandDescriptor {
                name: "history",
                description: "特定アイテムのレポート履歴",
                options: &[CATEGORY_OPTION, required("id", "対象のID", OptionKind::Integer)],
            },
            SubcommandDescriptor {
                name: "recent",
                description: "最近のレポート一覧",
                options: &[DAYS_OPTION],
            },
            keyword_subcommand("search", "レポート内容を検索"),
        ],
        options: &[],
    },
    CommandDescriptor {
        name: "search",
        description: "アイテムを検索",
        subcommands: &[
            keyword_subcommand("book", "本を検索"),
            keyword_subcommand("movie", "映画を検索"),
            keyword_subcommand("activity", "活動を検索"),
            keyword_subcommand("all", "全てから検索"),
        ],
        options: &[],
    },
    CommandDescriptor {
        name: "stats",
        description: "統計情報を表示",
        subcommands: &[
            bare_subcommand("summary", "全体統計"),
            bare_subcommand("weekly", "週次統計"),
            bare_subcommand("monthly", "月次統計"),
            bare_subcommand("books", "読書統計"),
            bare_subcommand("current", "現在進行中"),
        ],
        options: &[],
    },
];

/// Finds the descriptor of a command by name.
pub fn find(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|c| c.name == name)
}
