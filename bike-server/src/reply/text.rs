//! Reply text for a location message.

use crate::domain::GeoPoint;
use crate::nearest::RankedStation;

use super::map_link::map_view_url;

/// The location the user shared, as the messaging app describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryLocation {
    pub point: GeoPoint,
    pub title: Option<String>,
    pub address: Option<String>,
}

impl QueryLocation {
    /// A bare coordinate with no title or address.
    pub fn at(point: GeoPoint) -> Self {
        Self {
            point,
            title: None,
            address: None,
        }
    }

    /// Attach a place title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Render the reply sent back for a shared location.
///
/// The layout is: a header describing the shared location, a blank line,
/// a line introducing the list, one block per station, and finally the map
/// link. Distances are shown in whole metres.
///
/// The list line names how many stations follow (`最近兩個`, `最近零個`, ...)
/// rather than always saying `最近三個`, so the text differs from the fixed
/// wording whenever fewer than three stations are listed. Coordinates use
/// Rust's shortest float formatting, which prints whole degrees without a
/// fractional part (`0`, not `0.0`).
///
/// ```text
/// 名稱: 高雄車站
/// 地址: 高雄市三民區建國二路318號
/// 緯度: 22.6394
/// 經度: 120.3025
///
/// 最近兩個腳踏車站如下：
///
/// 站名：高雄車站
/// 距離(m)：42
/// 地址：建國二路
///
/// 站名：...
///
/// 檢視地圖：https://cbike.herokuapp.com/latlon/22.6394/120.3025?openExternalBrowser=1
/// ```
pub fn format_reply(query: &QueryLocation, ranked: &[RankedStation<'_>]) -> String {
    let mut text = format!(
        "名稱: {}\n地址: {}\n緯度: {}\n經度: {}\n\n",
        query.title.as_deref().unwrap_or_default(),
        query.address.as_deref().unwrap_or_default(),
        query.point.latitude,
        query.point.longitude,
    );

    text.push_str(&format!("最近{}個腳踏車站如下：\n\n", count_word(ranked.len())));

    for entry in ranked {
        text.push_str(&format!(
            "站名：{}\n距離(m)：{}\n地址：{}\n\n",
            entry.station.name,
            entry.rounded_meters(),
            entry.station.address,
        ));
    }

    text.push_str("檢視地圖：");
    text.push_str(&map_view_url(query.point));

    text
}

/// Chinese numeral for small counts, digits beyond ten.
fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "零", "一", "兩", "三", "四", "五", "六", "七", "八", "九", "十",
    ];

    WORDS
        .get(n)
        .map(|w| (*w).to_string())
        .unwrap_or_else(|| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, StationTable};
    use crate::nearest::rank_nearest;

    fn kaohsiung() -> QueryLocation {
        QueryLocation::at(GeoPoint::new(22.6273, 120.3014))
            .with_title("中央公園")
            .with_address("高雄市前金區中華四路")
    }

    #[test]
    fn full_reply() {
        let table = StationTable::new(vec![
            Station::new("中央公園站", "中華四路與五福三路口", 22.6273, 120.3014),
            Station::new("捷運中央公園站", "中山一路115號", 22.6273, 120.3024),
        ]);
        let query = kaohsiung();
        let ranked = rank_nearest(query.point, &table, 3);

        let text = format_reply(&query, &ranked);

        let expected = format!(
            "名稱: 中央公園\n\
             地址: 高雄市前金區中華四路\n\
             緯度: 22.6273\n\
             經度: 120.3014\n\
             \n\
             最近兩個腳踏車站如下：\n\
             \n\
             站名：中央公園站\n\
             距離(m)：0\n\
             地址：中華四路與五福三路口\n\
             \n\
             站名：捷運中央公園站\n\
             距離(m)：{}\n\
             地址：中山一路115號\n\
             \n\
             檢視地圖：https://cbike.herokuapp.com/latlon/22.6273/120.3014?openExternalBrowser=1",
            ranked[1].rounded_meters()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn distance_rounds_to_whole_metres() {
        let table = StationTable::new(vec![Station::new("East", "", 0.0, 1.0)]);
        let query = QueryLocation::at(GeoPoint::new(0.0, 0.0));
        let ranked = rank_nearest(query.point, &table, 3);

        let text = format_reply(&query, &ranked);

        assert!(text.contains("距離(m)：111195\n"), "{text}");
    }

    #[test]
    fn empty_result_keeps_header_and_link() {
        let query = kaohsiung();

        let text = format_reply(&query, &[]);

        assert!(text.starts_with("名稱: 中央公園\n地址: 高雄市前金區中華四路\n"));
        assert!(text.contains("最近零個腳踏車站如下：\n\n檢視地圖："));
        assert!(!text.contains("站名："));
        assert!(text.ends_with("/latlon/22.6273/120.3014?openExternalBrowser=1"));
    }

    #[test]
    fn missing_title_and_address_render_empty() {
        let query = QueryLocation::at(GeoPoint::new(1.5, 2.5));

        let text = format_reply(&query, &[]);

        assert!(text.starts_with("名稱: \n地址: \n緯度: 1.5\n經度: 2.5\n\n"));
    }

    #[test]
    fn one_block_per_station() {
        let table: StationTable = (0..5_i32)
            .map(|i| Station::new(format!("s{i}"), "", 0.0, f64::from(i) * 0.001))
            .collect();
        let query = QueryLocation::at(GeoPoint::new(0.0, 0.0));
        let ranked = rank_nearest(query.point, &table, 3);

        let text = format_reply(&query, &ranked);

        assert_eq!(text.matches("站名：").count(), 3);
        assert!(text.contains("最近三個腳踏車站如下："));
    }

    #[test]
    fn whole_degree_coordinates_have_no_fraction() {
        let query = QueryLocation::at(GeoPoint::new(0.0, 1.0));

        let text = format_reply(&query, &[]);

        assert!(text.contains("緯度: 0\n經度: 1\n"), "{text}");
        assert!(text.ends_with("/latlon/0/1?openExternalBrowser=1"));
    }

    #[test]
    fn count_words() {
        assert_eq!(count_word(0), "零");
        assert_eq!(count_word(2), "兩");
        assert_eq!(count_word(3), "三");
        assert_eq!(count_word(10), "十");
        assert_eq!(count_word(11), "11");
    }
}
