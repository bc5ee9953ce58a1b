use clap::Parser;
use internship_cli::commands::{
    logout, CompanyAction, CompanyCommand, ListAction, ListCommand, LoginCommand, ShowCommand,
};
use internship_core::{AppContext, CoreConfig, EditMode, MemoryStore, SystemClock};

#[derive(Parser)]
struct ListHarness {
    #[command(subcommand)]
    action: ListAction,
}

#[derive(Parser)]
struct CompanyHarness {
    #[command(subcommand)]
    action: CompanyAction,
}

fn list_cmd(args: &[&str]) -> ListCommand {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    ListCommand {
        action: ListHarness::try_parse_from(argv).unwrap().action,
    }
}

fn company_cmd(args: &[&str]) -> CompanyCommand {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    CompanyCommand {
        action: CompanyHarness::try_parse_from(argv).unwrap().action,
    }
}

fn login(ctx: &AppContext<'_>) {
    let cmd = LoginCommand {
        username: "intern".to_string(),
        password: Some("evaluate123".to_string()),
    };
    let mut out = Vec::new();
    cmd.run(ctx, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "→ redirect: dashboard.html\n");
}

fn never_confirm(_: &str) -> bool {
    false
}

#[test]
fn list_commands_require_a_session() {
    let store = MemoryStore::new();
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    let mut out = Vec::new();
    list_cmd(&["add", "-f", "date=2026-10-19", "-f", "task=Docs"])
        .run(&ctx, &ctx.progress(), &mut out, &never_confirm)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "→ redirect: index.html\n");
    assert!(ctx.progress().entries().unwrap().is_empty());
}

#[test]
fn wrong_password_prints_login_error() {
    let store = MemoryStore::new();
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    let cmd = LoginCommand {
        username: "intern".to_string(),
        password: Some("guess".to_string()),
    };
    let mut out = Vec::new();
    cmd.run(&ctx, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Invalid username or password.\n"
    );
}

#[test]
fn progress_add_edit_delete_and_clear() {
    let store = MemoryStore::new();
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    login(&ctx);

    let mut out = Vec::new();
    list_cmd(&["add", "-f", "date=2026-10-18", "-f", "task=Setup", "-f", "hours=3"])
        .run(&ctx, &ctx.progress(), &mut out, &never_confirm)
        .unwrap();
    list_cmd(&["add", "-f", "date=2026-10-19", "-f", "task=Docs"])
        .run(&ctx, &ctx.progress(), &mut out, &never_confirm)
        .unwrap();

    let mut out = Vec::new();
    list_cmd(&["edit", "1", "-f", "task=Setup CI"])
        .run(&ctx, &ctx.progress(), &mut out, &never_confirm)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Entry 1 updated.\n"));
    assert!(text.contains("[0] 2026-10-19 | 0 h | Docs | In Progress"));
    assert!(text.contains("[1] 2026-10-18 | 3 h | Setup CI | In Progress"));

    let mut out = Vec::new();
    list_cmd(&["delete", "7"])
        .run(&ctx, &ctx.progress(), &mut out, &never_confirm)
        .unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("No entry at index 7."));

    list_cmd(&["delete", "0"])
        .run(&ctx, &ctx.progress(), &mut Vec::new(), &never_confirm)
        .unwrap();
    assert_eq!(ctx.progress().entries().unwrap().len(), 1);

    let mut out = Vec::new();
    list_cmd(&["clear"])
        .run(&ctx, &ctx.progress(), &mut out, &never_confirm)
        .unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("Nothing cleared."));
    assert_eq!(ctx.progress().entries().unwrap().len(), 1);

    list_cmd(&["clear", "--yes"])
        .run(&ctx, &ctx.progress(), &mut Vec::new(), &never_confirm)
        .unwrap();
    assert!(ctx.progress().entries().unwrap().is_empty());
}

#[test]
fn unknown_field_is_an_error() {
    let store = MemoryStore::new();
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    login(&ctx);

    let error = list_cmd(&["add", "-f", "mood=great"])
        .run(&ctx, &ctx.feedback(), &mut Vec::new(), &never_confirm)
        .unwrap_err();
    assert!(error.to_string().contains("unknown field `mood`"));
}

#[test]
fn take_out_edit_moves_entry_to_top() {
    let store = MemoryStore::new();
    let clock = SystemClock;
    let ctx = AppContext::new(
        &store,
        &clock,
        CoreConfig::with_edit_mode(EditMode::TakeOut),
    );
    login(&ctx);

    for message in ["first", "second"] {
        let field = format!("message={message}");
        list_cmd(&["add", "-f", field.as_str(), "-f", "rating=4"])
            .run(&ctx, &ctx.feedback(), &mut Vec::new(), &never_confirm)
            .unwrap();
    }

    let mut out = Vec::new();
    list_cmd(&["edit", "1"])
        .run(&ctx, &ctx.feedback(), &mut out, &never_confirm)
        .unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("Entry added."));
    let messages = ctx
        .feedback()
        .entries()
        .unwrap()
        .into_iter()
        .map(|entry| entry.message)
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn company_save_show_clear_and_page_guard() {
    let store = MemoryStore::new();
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    login(&ctx);

    let mut out = Vec::new();
    company_cmd(&["save", "-f", "name=Acme", "-f", "mentor=Dana"])
        .run(&ctx, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Company: Acme\nMentor: Dana\nEmail: \nPhone: \nAddress: \n"));

    let mut out = Vec::new();
    company_cmd(&["clear"]).run(&ctx, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No data saved yet.\n");

    logout(&ctx, &mut Vec::new()).unwrap();
    let mut out = Vec::new();
    ShowCommand {
        page: "company".to_string(),
    }
    .run(&ctx, &mut out)
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "→ redirect: index.html\n");
}
