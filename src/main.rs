fn main() {
    sheet_insight_lib::run()
}
