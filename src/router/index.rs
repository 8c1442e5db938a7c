pub(crate) async fn handle() -> &'static str {
    "\n    Hi from flask!\n    "
}
