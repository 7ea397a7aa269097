pub fn parse_work_time(raw: &str) -> Result<jiff::civil::Time, jiff::Error> {
    jiff::civil::Time::strptime("%H:%M", raw)
}
